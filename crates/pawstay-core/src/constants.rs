/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const ROOMS_ROUTE_COMPONENT: &str = "rooms";
pub const ROOMS_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", ROOMS_ROUTE_COMPONENT);

pub const AVAILABILITY_ROUTE_COMPONENT: &str = "availability";
pub const AVAILABILITY_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", AVAILABILITY_ROUTE_COMPONENT);

pub const RESERVATIONS_ROUTE_COMPONENT: &str = "reservations";
pub const RESERVATIONS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", RESERVATIONS_ROUTE_COMPONENT);

/// Widest availability window a client may ask for, as `end - start` in days.
pub const AVAILABILITY_MAX_WINDOW_DAYS: i64 = 92;

/// Length of the availability window when the client omits `end`.
pub const AVAILABILITY_DEFAULT_WINDOW_DAYS: i64 = 30;

/// Maximum length of a reservation's dog name, in characters.
pub const DOG_NAME_MAX_CHARS: usize = 50;

/// Upper bound for a client-requested page size.
pub const MAX_PAGE_SIZE: i64 = 100;
