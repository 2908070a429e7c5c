//! The built-in roster shipped with the application.

use crate::models::{Availability, Doctor};

const MON_WED_FRI: &[&str] = &["Monday", "Wednesday", "Friday"];
const TUE_THU_SAT: &[&str] = &["Tuesday", "Thursday", "Saturday"];

fn doctor(
    id: &str,
    name: &str,
    specialty: &str,
    rating: f32,
    days: &[&str],
    time_slots: &[&str],
    location: &str,
) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        rating,
        availability: Availability {
            days: days.iter().map(|d| d.to_string()).collect(),
            time_slots: time_slots.iter().map(|t| t.to_string()).collect(),
        },
        location: location.to_string(),
    }
}

pub fn default_doctors() -> Vec<Doctor> {
    vec![
        doctor(
            "1",
            "Dr. Sarah Johnson",
            "Cardiology",
            4.8,
            MON_WED_FRI,
            &["09:00", "10:00", "11:00", "14:00", "15:00"],
            "Downtown Medical Center",
        ),
        doctor(
            "2",
            "Dr. Michael Chen",
            "Pediatrics",
            4.9,
            TUE_THU_SAT,
            &["08:00", "09:00", "10:00", "13:00", "14:00"],
            "Children's Hospital",
        ),
        doctor(
            "3",
            "Dr. Emily Rodriguez",
            "Dermatology",
            4.7,
            &["Monday", "Wednesday", "Thursday"],
            &["10:00", "11:00", "14:00", "15:00", "16:00"],
            "Skin Care Clinic",
        ),
        doctor(
            "4",
            "Dr. James Wilson",
            "Orthopedics",
            4.6,
            &["Tuesday", "Thursday", "Friday"],
            &["08:00", "09:00", "13:00", "14:00", "15:00"],
            "Sports Medicine Center",
        ),
        doctor(
            "5",
            "Dr. Lisa Patel",
            "Neurology",
            4.9,
            MON_WED_FRI,
            &["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"],
            "Neurological Institute",
        ),
        doctor(
            "6",
            "Dr. Robert Kim",
            "Ophthalmology",
            4.8,
            TUE_THU_SAT,
            &["08:00", "09:00", "10:00", "13:00", "14:00", "15:00"],
            "Eye Care Center",
        ),
        doctor(
            "7",
            "Dr. Maria Garcia",
            "Endocrinology",
            4.7,
            MON_WED_FRI,
            &["09:00", "10:00", "11:00", "14:00", "15:00"],
            "Endocrine Specialists",
        ),
        doctor(
            "8",
            "Dr. David Thompson",
            "Gastroenterology",
            4.8,
            TUE_THU_SAT,
            &["08:00", "09:00", "10:00", "13:00", "14:00"],
            "Digestive Health Center",
        ),
        doctor(
            "9",
            "Dr. Jennifer Lee",
            "Psychiatry",
            4.9,
            MON_WED_FRI,
            &["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"],
            "Mental Health Clinic",
        ),
        doctor(
            "10",
            "Dr. Ahmed Hassan",
            "Urology",
            4.7,
            TUE_THU_SAT,
            &["08:00", "09:00", "10:00", "13:00", "14:00", "15:00"],
            "Urology Center",
        ),
    ]
}
