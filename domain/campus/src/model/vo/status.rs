use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

macro_rules! status_enum {
    ($(#[$meta:meta])* $name:ident { #[default] $default:ident => $default_text:literal $(, $variant:ident => $text:literal)* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum $name {
            #[default]
            $default,
            $($variant,)*
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $name::$default => $default_text,
                    $($name::$variant => $text,)*
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

status_enum!(
    /// Status of scheduled things: events and activities.
    ScheduleStatus {
        #[default]
        Upcoming => "upcoming",
        Ongoing => "ongoing",
        Completed => "completed",
    }
);

status_enum!(
    FacilityStatus {
        #[default]
        Available => "available",
        Maintenance => "maintenance",
        Booked => "booked",
    }
);

status_enum!(
    ClubStatus {
        #[default]
        Active => "active",
        Inactive => "inactive",
    }
);

status_enum!(
    ElectionStatus {
        #[default]
        Upcoming => "upcoming",
        Active => "active",
        Completed => "completed",
    }
);

status_enum!(
    BookingStatus {
        #[default]
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
    }
);

status_enum!(
    ComplaintStatus {
        #[default]
        Submitted => "submitted",
        UnderReview => "under review",
        Resolved => "resolved",
    }
);
