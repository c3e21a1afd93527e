//! Diagnosis lookup
//!
//! The 25 presenting diagnoses the generator draws from, each with its owning
//! department and base triage severity.

use crate::models::EsiLevel;

/// A diagnosis together with its owning department and base ESI level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosisEntry {
    pub name: &'static str,
    pub department: &'static str,
    base_esi: u8,
}

impl DiagnosisEntry {
    const fn new(name: &'static str, department: &'static str, base_esi: u8) -> Self {
        Self {
            name,
            department,
            base_esi,
        }
    }

    /// Severity before the per-visit perturbation
    #[must_use]
    pub fn base_severity(&self) -> EsiLevel {
        EsiLevel::clamped(i32::from(self.base_esi))
    }
}

pub const DIAGNOSES: [DiagnosisEntry; 25] = [
    DiagnosisEntry::new("Intracranial Hemorrhage", "Neurology", 1),
    DiagnosisEntry::new("Acute MI", "Cardiology", 1),
    DiagnosisEntry::new("Sepsis", "Infectious Disease", 1),
    DiagnosisEntry::new("Stroke", "Neurology", 1),
    DiagnosisEntry::new("Respiratory Failure", "Respiratory", 2),
    DiagnosisEntry::new("COPD Exacerbation", "Respiratory", 2),
    DiagnosisEntry::new("Acute Gastroenteritis", "Gastroenterology", 3),
    DiagnosisEntry::new("Acute Pancreatitis", "Gastroenterology", 2),
    DiagnosisEntry::new("Electrolyte Disorder", "General Practice", 3),
    DiagnosisEntry::new("Adrenal Crisis", "Endocrinology", 2),
    DiagnosisEntry::new("Acute Arthritis", "Orthopedics", 3),
    DiagnosisEntry::new("Fracture", "Orthopedics", 3),
    DiagnosisEntry::new("Chest Pain", "Cardiology", 3),
    DiagnosisEntry::new("Abdominal Pain", "Gastroenterology", 3),
    DiagnosisEntry::new("Headache", "Neurology", 3),
    DiagnosisEntry::new("Eye Trauma", "Ophthalmology", 3),
    DiagnosisEntry::new("Laceration", "General Practice", 4),
    DiagnosisEntry::new("UTI", "Infectious Disease", 3),
    DiagnosisEntry::new("Pneumonia", "Respiratory", 2),
    DiagnosisEntry::new("Asthma Exacerbation", "Respiratory", 3),
    DiagnosisEntry::new("Cellulitis", "Infectious Disease", 3),
    DiagnosisEntry::new("Minor Burn", "General Practice", 4),
    DiagnosisEntry::new("Sprain", "Orthopedics", 4),
    DiagnosisEntry::new("Viral Syndrome", "General Practice", 4),
    DiagnosisEntry::new("Dehydration", "General Practice", 3),
];

/// Look up a diagnosis by name
#[must_use]
pub fn find_diagnosis(name: &str) -> Option<&'static DiagnosisEntry> {
    DIAGNOSES.iter().find(|entry| entry.name == name)
}
