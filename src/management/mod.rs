mod session;

pub use session::SESSION_COOKIE;
pub use session::Session;
pub use session::SessionManager;
