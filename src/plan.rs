//! Static content for the Goals tab. All of it is fixed text decided up
//! front for the Pittsburgh -> DC ride buildup; nothing here is computed
//! or stored.

pub const PAGE_TITLE: &str = "Pittsburg -> DC Training Tracker";

pub const GOALS: [&str; 3] = [
    "Improve FTP",
    "Improve body composition",
    "Complete GAP-CO for female FKT submission",
];

/// Named monthly mileage targets, month -> target text.
pub const MONTHLY_TARGETS: [(&str, &str); 3] = [
    ("July", "700 miles"),
    ("August", "850 miles"),
    ("September", "1000 miles"),
];

/// Ride-length definitions shown as the legend for the S/M/L/XL codes.
pub const RIDE_DEFINITIONS: [(&str, &str); 4] = [
    (
        "Short ride",
        "10-30 miles, hill repeats, interval sprints, or indoor trainer",
    ),
    ("Medium ride", "31-80 miles, high effort pace"),
    ("Long ride", "81-115 miles, endurance pace"),
    (
        "XL ride",
        ">115 miles aiming for ~125-150 miles, endurance pace",
    ),
];

pub struct PlanDay {
    pub day: &'static str,
    pub intensity: &'static str,
    pub morning: &'static str,
    pub evening: &'static str,
    pub duration: &'static str,
}

pub const WEEKLY_PLAN: [PlanDay; 7] = [
    PlanDay {
        day: "Monday",
        intensity: "Low-Mid",
        morning: "Rest or Pete",
        evening: "Animal Flow or FTP",
        duration: "0-2 hrs",
    },
    PlanDay {
        day: "Tuesday",
        intensity: "High",
        morning: "Short Ride & Pete",
        evening: "Yoga",
        duration: "3-5 hrs",
    },
    PlanDay {
        day: "Wednesday",
        intensity: "Mid",
        morning: "Pete",
        evening: "Teach Yoga",
        duration: "2 hrs",
    },
    PlanDay {
        day: "Thursday",
        intensity: "High",
        morning: "Short Ride & Pete",
        evening: "Teach Yoga x2",
        duration: "3-6 hrs",
    },
    PlanDay {
        day: "Friday",
        intensity: "Low",
        morning: "Rest or Pete",
        evening: "Rest",
        duration: "1-2 hrs",
    },
    PlanDay {
        day: "Saturday",
        intensity: "High",
        morning: "Medium, Large ride, or XL ride",
        evening: "Rest or Yoga",
        duration: "4-12 hrs",
    },
    PlanDay {
        day: "Sunday",
        intensity: "High",
        morning: "Medium, Large ride, or XL ride",
        evening: "Rest or Animal Flow",
        duration: "4-12 hrs",
    },
];
