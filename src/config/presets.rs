use {
    crate::domain::{Investment, Location, LookupError, Roster},
    chrono::NaiveDate,
};

// Standard monthly program fee, shared by every built-in dataset.
const PROGRAM_MONTHLY: f64 = 399.08;
const TRAINING_MONTHLY: f64 = 816.5;

/// The named practice/doctor -> roster mapping the dashboard selects from.
/// Rosters are hand-authored demo datasets; a deployment would swap in its
/// own configuration source with the same shape.
pub struct PresetBook {
    entries: Vec<(String, Roster)>,
}

impl PresetBook {
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                ("Chicago Dental Group".to_string(), chicago_dental_group()),
                ("Dr. Bawa".to_string(), dr_bawa()),
                ("Dr. Huggins".to_string(), dr_huggins()),
            ],
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Lookup by practice name. A miss is a typed NotFound -- callers
    /// decide the fallback, the book never substitutes.
    pub fn roster(&self, name: &str) -> Result<&Roster, LookupError> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, roster)| roster)
            .ok_or_else(|| LookupError::PresetNotFound(name.to_string()))
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid preset date")
}

/// A site that signed up but has not started producing numbers yet.
fn dormant(name: &str, start: NaiveDate) -> Location {
    Location::new(name, 0.0, 0.0, 0.0, start)
}

fn chicago_dental_group() -> Roster {
    Roster::new(
        vec![
            Location::new("Bradley Place", 27.0, 35.08, 2978.0, ymd(2022, 10, 1)),
            Location::new("East Lake", 37.08, 42.33, 2101.0, ymd(2022, 10, 1)),
            Location::new("Fullerton", 22.92, 22.08, 2457.0, ymd(2022, 10, 1)),
        ],
        Investment {
            program: PROGRAM_MONTHLY,
            training: Some(TRAINING_MONTHLY),
        },
    )
}

fn dr_bawa() -> Roster {
    Roster::new(
        vec![Location::new(
            "Potomac Crown",
            40.0,
            42.0,
            3315.0,
            ymd(2023, 1, 1),
        )],
        Investment {
            program: PROGRAM_MONTHLY,
            training: None,
        },
    )
}

fn dr_huggins() -> Roster {
    let start = ymd(2023, 1, 1);
    let mut locations = vec![Location::new(
        "Batesville Dental",
        55.0,
        55.0,
        2500.0,
        start,
    )];
    locations.extend(
        [
            "North River Dental",
            "Forest Lake Dental",
            "Colony Dental",
            "Starkville Dental",
            "North Alabama Dental",
            "Helena Dental",
            "Premier Dental",
            "Bright Smiles Dental",
            "Southern Family Dental",
            "Life Dental",
            "Huntsville Dental",
            "Vestavia Dental",
            "River City Dental",
            "Lake Harbour Dental",
        ]
        .into_iter()
        .map(|name| dormant(name, start)),
    );

    Roster::new(
        locations,
        Investment {
            program: PROGRAM_MONTHLY,
            training: None,
        },
    )
}
