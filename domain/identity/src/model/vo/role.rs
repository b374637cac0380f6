use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::{MenuItem, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Admin,
    Student,
    TeachingStaff,
    NonTeachingStaff,
}

impl Role {
    /// Dashboard shown right after login.
    pub fn landing_route(self) -> Route {
        match self {
            Role::Admin => Route::AdminDashboard,
            Role::Student => Route::StudentDashboard,
            Role::TeachingStaff => Route::TeachingDashboard,
            Role::NonTeachingStaff => Route::NonTeachingDashboard,
        }
    }

    pub fn menu(self) -> Vec<MenuItem> {
        let items: &[(&'static str, Route)] = match self {
            Role::Admin => &[
                ("Teaching Staff", Route::TeachingStaff),
                ("Non-Teaching Staff", Route::NonTeachingStaff),
                ("Student Management", Route::StudentManagement),
                ("Facility Management", Route::FacilityManagement),
                ("Facility Bookings", Route::FacilityBookings),
                ("Events", Route::Events),
                ("Elections", Route::ElectionManagement),
                ("Clubs", Route::Clubs),
                ("Other Activities", Route::Activities),
                ("Settings", Route::Settings),
            ],
            Role::Student => &[
                ("Course Materials", Route::CourseMaterials),
                ("Attendance", Route::Attendance),
                ("Assignments", Route::Assignments),
                ("Results", Route::Results),
                ("Complaints", Route::Complaints),
                ("Facilities", Route::Facilities),
                ("Clubs", Route::StudentClubs),
                ("Activities", Route::StudentActivities),
                ("Settings", Route::Settings),
            ],
            Role::TeachingStaff | Role::NonTeachingStaff => &[
                ("Facilities", Route::Facilities),
                ("Complaints", Route::Complaints),
                ("Settings", Route::Settings),
            ],
        };
        items.iter().map(|&(title, route)| MenuItem { title, route }).collect()
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Admin => "admin",
            Role::Student => "student",
            Role::TeachingStaff => "teaching staff",
            Role::NonTeachingStaff => "non-teaching staff",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_routes() {
        assert_eq!(Role::Admin.landing_route().path(), "/(dashboards)/admin");
        assert_eq!(Role::Student.landing_route().path(), "/(dashboards)/student");
        assert_eq!(Role::TeachingStaff.landing_route().path(), "/(dashboards)/teaching");
        assert_eq!(
            Role::NonTeachingStaff.landing_route().path(),
            "/(dashboards)/non-teaching"
        );
    }

    #[test]
    fn every_menu_has_settings() {
        for role in [Role::Admin, Role::Student, Role::TeachingStaff, Role::NonTeachingStaff] {
            assert_eq!(role.menu().last().map(|item| item.route), Some(Route::Settings));
        }
    }

    #[test]
    fn admin_menu_reaches_management_screens() {
        let routes: Vec<_> = Role::Admin.menu().into_iter().map(|item| item.route).collect();
        assert!(routes.contains(&Route::StudentManagement));
        assert!(routes.contains(&Route::ElectionManagement));
        assert!(!routes.contains(&Route::CourseMaterials));
    }
}
