/// Execution settings for the fast transform.
///
/// The only setting is [`StageExecution`], which decides whether the butterflies of a stage run
/// on the calling thread or on the rayon pool. Transform routines called without options use
/// [`Options::guess_options`]. The numeric result is the same either way.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub stage_execution: StageExecution,
}

/// With the `parallel` feature, inputs with at least `2^PARALLEL_STAGE_THRESHOLD` points run
/// their stages in parallel by default.
pub const PARALLEL_STAGE_THRESHOLD: u32 = 14;

impl Options {
    /// Picks [`StageExecution::Parallel`] for large inputs when the `parallel` feature is
    /// enabled, and [`StageExecution::Sequential`] otherwise.
    pub fn guess_options(input_size: usize) -> Options {
        let mut options = Options::default();
        if cfg!(feature = "parallel")
            && input_size > 0
            && input_size.ilog2() >= PARALLEL_STAGE_THRESHOLD
        {
            options.stage_execution = StageExecution::Parallel;
        }
        options
    }

    pub fn with_stage_execution(mut self, stage_execution: StageExecution) -> Self {
        self.stage_execution = stage_execution;
        self
    }
}

/// How the independent butterflies of one fast-transform stage are executed.
/// Stages themselves always run one after another.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum StageExecution {
    #[default]
    /// One butterfly after another on the calling thread
    Sequential,
    /// Butterflies spread over the rayon thread pool.
    ///
    /// Only takes effect with the `parallel` feature; without it this behaves like `Sequential`.
    Parallel,
}
