use std::fmt::{self, Display};

/// Named screens known to the navigation framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    AdminDashboard,
    StudentDashboard,
    TeachingDashboard,
    NonTeachingDashboard,
    Settings,
    // admin
    TeachingStaff,
    NonTeachingStaff,
    StudentManagement,
    FacilityManagement,
    FacilityBookings,
    Events,
    ElectionManagement,
    Clubs,
    Activities,
    // student
    CourseMaterials,
    Attendance,
    Assignments,
    Results,
    StudentClubs,
    StudentActivities,
    // tabs
    Complaints,
    Facilities,
    Elections,
}

impl Route {
    pub const ALL: [Route; 24] = [
        Route::Login,
        Route::AdminDashboard,
        Route::StudentDashboard,
        Route::TeachingDashboard,
        Route::NonTeachingDashboard,
        Route::Settings,
        Route::TeachingStaff,
        Route::NonTeachingStaff,
        Route::StudentManagement,
        Route::FacilityManagement,
        Route::FacilityBookings,
        Route::Events,
        Route::ElectionManagement,
        Route::Clubs,
        Route::Activities,
        Route::CourseMaterials,
        Route::Attendance,
        Route::Assignments,
        Route::Results,
        Route::StudentClubs,
        Route::StudentActivities,
        Route::Complaints,
        Route::Facilities,
        Route::Elections,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::AdminDashboard => "/(dashboards)/admin",
            Route::StudentDashboard => "/(dashboards)/student",
            Route::TeachingDashboard => "/(dashboards)/teaching",
            Route::NonTeachingDashboard => "/(dashboards)/non-teaching",
            Route::Settings => "/(tabs)/settings",
            Route::TeachingStaff => "/admin/teaching-staff",
            Route::NonTeachingStaff => "/admin/non-teaching-staff",
            Route::StudentManagement => "/admin/student-management",
            Route::FacilityManagement => "/admin/facility-management",
            Route::FacilityBookings => "/admin/facility-bookings",
            Route::Events => "/admin/events",
            Route::ElectionManagement => "/admin/election-management",
            Route::Clubs => "/admin/clubs",
            Route::Activities => "/admin/activities",
            Route::CourseMaterials => "/student/materials",
            Route::Attendance => "/student/attendance",
            Route::Assignments => "/student/assignments",
            Route::Results => "/student/results",
            Route::StudentClubs => "/student/clubs",
            Route::StudentActivities => "/student/activities",
            Route::Complaints => "/(tabs)/complaints",
            Route::Facilities => "/(tabs)/facilities",
            Route::Elections => "/(tabs)/elections",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn paths_are_unique_and_parse_back() {
        let paths: HashSet<_> = Route::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), Route::ALL.len());
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/nowhere"), None);
    }
}
