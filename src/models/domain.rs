//! Enumerated column domains.
//!
//! Each enum is stored as its literal text, matching the CHECK constraints in
//! `migrations/`, so a value read back from the database is always one of the
//! declared variants.
use std::{fmt, str::FromStr};

use diesel::{
    backend::Backend,
    deserialize::{self, FromSql, FromSqlRow},
    expression::AsExpression,
    serialize::{self, IsNull, Output, ToSql},
    sql_types::Text,
    sqlite::Sqlite,
};

macro_rules! text_domain {
    (
        $(#[$meta:meta])* $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsExpression, FromSqlRow)]
        #[diesel(sql_type = Text)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(format!("`{}` is not a valid {}", other, stringify!($name))),
                }
            }
        }

        impl ToSql<Text, Sqlite> for $name {
            fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
                out.set_value(self.as_str());
                Ok(IsNull::No)
            }
        }

        impl FromSql<Text, Sqlite> for $name {
            fn from_sql(bytes: <Sqlite as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
                let text = <String as FromSql<Text, Sqlite>>::from_sql(bytes)?;
                text.parse().map_err(Into::into)
            }
        }
    };
}

text_domain! {
    Sex {
        M => "M",
        F => "F",
    }
}

text_domain! {
    /// Kind of rentable unit; also a client's preferred kind.
    PropertyType {
        House => "House",
        Flat => "Flat",
        Apartment => "Apartment",
        Bungalow => "Bungalow",
    }
}

text_domain! {
    /// Whether a client is still looking for a property.
    #[derive(Default)]
    ClientStatus {
        #[default]
        Open => "Open",
        Closed => "Closed",
    }
}

impl ClientStatus {
    /// Status once a lease has been signed. Closed is terminal.
    pub fn after_lease(self) -> Self {
        ClientStatus::Closed
    }
}
