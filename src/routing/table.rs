//! The fixed endpoint table.

/// Every GET endpoint the upstream serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Hello,
    Health,
    Delay,
    Error,
    Random,
    Echo,
}

impl Endpoint {
    pub const ALL: [Endpoint; 6] = [
        Endpoint::Hello,
        Endpoint::Health,
        Endpoint::Delay,
        Endpoint::Error,
        Endpoint::Random,
        Endpoint::Echo,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Hello => "/",
            Endpoint::Health => "/health",
            Endpoint::Delay => "/delay",
            Endpoint::Error => "/error",
            Endpoint::Random => "/random",
            Endpoint::Echo => "/echo",
        }
    }

    /// Path with its query hint and a short description, for the banner.
    pub fn usage(self) -> (&'static str, &'static str) {
        match self {
            Endpoint::Hello => ("/", "Basic hello response"),
            Endpoint::Health => ("/health", "Health check"),
            Endpoint::Delay => ("/delay?ms=X", "Delayed response (default 1000ms)"),
            Endpoint::Error => ("/error?code=X", "Error response (default 500)"),
            Endpoint::Random => ("/random", "Random success/failure (30% failure)"),
            Endpoint::Echo => ("/echo", "Echo request info"),
        }
    }
}
