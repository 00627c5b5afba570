//! Built-in activity list loaded once at process start.
//!
//! The registry never gains or loses activities after seeding; only the
//! participant lists change.

use indexmap::IndexMap;

use crate::activity::Activity;

/// Returns the fixed startup activities, in presentation order.
#[must_use]
pub fn seed_activities() -> IndexMap<String, Activity> {
    let mut activities = IndexMap::new();

    activities.insert(
        "Chess Club".to_owned(),
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(vec![
            "michael@mergington.edu".to_owned(),
            "daniel@mergington.edu".to_owned(),
        ]),
    );

    activities.insert(
        "Programming Class".to_owned(),
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(vec![
            "emma@mergington.edu".to_owned(),
            "sophia@mergington.edu".to_owned(),
        ]),
    );

    activities.insert(
        "Gym Class".to_owned(),
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(vec![
            "john@mergington.edu".to_owned(),
            "olivia@mergington.edu".to_owned(),
        ]),
    );

    activities.insert(
        "Tennis Club".to_owned(),
        Activity::new(
            "Practice serves, rallies, and friendly matches on the school courts",
            "Wednesdays, 3:30 PM - 5:00 PM",
            14,
        ),
    );

    activities.insert(
        "Soccer Team".to_owned(),
        Activity::new(
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
        )
        .with_participants(vec![
            "liam@mergington.edu".to_owned(),
            "noah@mergington.edu".to_owned(),
        ]),
    );

    activities.insert(
        "Art Club".to_owned(),
        Activity::new(
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(vec![
            "amelia@mergington.edu".to_owned(),
            "harper@mergington.edu".to_owned(),
        ]),
    );

    activities.insert(
        "Drama Club".to_owned(),
        Activity::new(
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
        )
        .with_participants(vec![
            "ella@mergington.edu".to_owned(),
            "scarlett@mergington.edu".to_owned(),
        ]),
    );

    activities.insert(
        "Math Club".to_owned(),
        Activity::new(
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
        )
        .with_participants(vec![
            "james@mergington.edu".to_owned(),
            "benjamin@mergington.edu".to_owned(),
        ]),
    );

    activities.insert(
        "Debate Team".to_owned(),
        Activity::new(
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
        )
        .with_participants(vec![
            "charlotte@mergington.edu".to_owned(),
            "henry@mergington.edu".to_owned(),
        ]),
    );

    activities
}
