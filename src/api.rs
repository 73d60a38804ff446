mod client;
mod sahko;

pub use self::sahko::Api as SahkoTk;
