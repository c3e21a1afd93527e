//! Staff roster grouped by specialty
//!
//! Only the registrars assigned to a specialty receive weekly hours.

use crate::models::StaffRole;

/// A specialty and the staff members rostered on it
#[derive(Debug, Clone, Copy)]
pub struct SpecialtyRoster {
    pub specialty: &'static str,
    pub members: &'static [&'static str],
}

/// Role recorded for every generated staff-hours row
pub const ROSTER_ROLE: StaffRole = StaffRole::Registrar;

pub const SPECIALTY_ROSTERS: [SpecialtyRoster; 3] = [
    SpecialtyRoster {
        specialty: "Acute Care",
        members: &[
            "Dr. Zainab Omar",
            "Dr. Thomas Anderson",
            "Dr. Olga Petrov",
            "Dr. Nina Ivanova",
            "Dr. Daniel Cohen",
            "Dr. Carlos Garcia",
            "Dr. Ahmed Farah",
        ],
    },
    SpecialtyRoster {
        specialty: "Emergency Medicine",
        members: &[
            "Dr. Yuki Tanaka",
            "Dr. Sofia Mendoza",
            "Dr. Mohammed Hassan",
            "Dr. Li Wei",
            "Dr. Kevin Murphy",
        ],
    },
    SpecialtyRoster {
        specialty: "Pediatric Emergency",
        members: &["Dr. Priya Sharma", "Dr. Lucas Wright", "Dr. Emma Thompson"],
    },
];

/// Total number of rostered staff across all specialties
#[must_use]
pub fn roster_size() -> usize {
    SPECIALTY_ROSTERS.iter().map(|r| r.members.len()).sum()
}

/// Iterate `(specialty, staff name)` pairs in roster order
pub fn roster_members() -> impl Iterator<Item = (&'static str, &'static str)> {
    SPECIALTY_ROSTERS
        .iter()
        .flat_map(|r| r.members.iter().map(move |name| (r.specialty, *name)))
}
