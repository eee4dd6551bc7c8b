use std::fmt;
use std::str::FromStr;

use thiserror::Error;

macro_rules! server_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(u64);

        impl $name {
            #[must_use]
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            #[must_use]
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

server_id!(
    /// Card id assigned by the API.
    CardId
);
server_id!(
    /// Deck id assigned by the API; also the `:deck_id` route segment.
    DeckId
);
server_id!(
    /// User id assigned at signup and kept in the session store.
    UserId
);

/// The session store held something other than an integer under `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid user id in session store: {raw:?}")]
pub struct InvalidUserId {
    raw: String,
}

impl FromStr for UserId {
    type Err = InvalidUserId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(UserId::new)
            .map_err(|_| InvalidUserId { raw: s.to_owned() })
    }
}
