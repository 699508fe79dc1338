pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the configuration constants for the poller and
    //! dashboard, organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Event buffer size between the poller task and the UI
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Buffer size for pause/resume commands sent to the poller
    pub const COMMAND_QUEUE_SIZE: usize = 8;

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    /// Step polling cadence configuration
    pub mod polling {
        /// Time between poll ticks (milliseconds)
        pub const DEFAULT_INTERVAL_MS: u64 = 1000;

        /// Lowest accepted poll interval (milliseconds)
        pub const MIN_INTERVAL_MS: u64 = 100;

        /// Steps advanced per successful tick
        pub const DEFAULT_STEP_SIZE: u64 = 1;
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP client configuration for the step endpoint
    pub mod network {
        use std::time::Duration;

        /// Route serving one step of aggregate metrics
        pub const STEP_ENDPOINT: &str = "get_step";

        /// Query parameter selecting a specific step
        pub const STEP_QUERY_PARAM: &str = "step_num";

        /// Connect timeout (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 5;

        /// Whole-request timeout (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 5;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // CALENDAR CONFIGURATION
    // =============================================================================

    /// Simulation steps per Martian sol.
    pub const STEPS_PER_SOL: f64 = 24.65;
}
