mod rotation;

pub use rotation::RotationSolver;

/// An iterative numerical routine producing `R`.
pub trait Solver<R>: Send + Sync
where
    R: Send + Sync,
{
    const MAX_ITER: usize = 0;

    /// Runs at most `repeat` iterations.
    fn solve(self, repeat: usize) -> R;

    #[inline]
    fn solve_to_end(self) -> R
    where
        Self: Sized,
    {
        self.solve(Self::MAX_ITER)
    }
}
