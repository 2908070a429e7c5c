use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::NaiveDate;

use appointment_cell::{
    AppointmentError, BookingService, BookingStore, NewAppointment, BOOKING_STORAGE_KEY,
};
use doctor_cell::Catalog;
use shared_config::SlotPolicy;
use shared_database::KeyValueStorage;
use shared_utils::test_utils::{init_test_tracing, scenario_catalog, TestStorage};

fn open_store(test_storage: &TestStorage, policy: SlotPolicy) -> BookingStore {
    BookingStore::load(Arc::new(test_storage.open()), policy)
}

#[test]
fn test_booking_scenario_is_per_doctor() {
    init_test_tracing();
    let test_storage = TestStorage::new();
    let mut store = open_store(&test_storage, SlotPolicy::Exclusive);
    let service = BookingService::new(Arc::new(scenario_catalog()));

    let booked = service.book(&mut store, "A", "09:00", None).expect("Booking should succeed");

    assert_eq!(booked.doctor_name, "Dr. A");
    assert_eq!(booked.specialty, "Cardiology");
    assert!(store.is_slot_booked("A", "09:00"));
    assert!(!store.is_slot_booked("B", "09:00"));
}

#[test]
fn test_booking_copies_doctor_details_and_date() {
    let test_storage = TestStorage::new();
    let mut store = open_store(&test_storage, SlotPolicy::Exclusive);
    let service = BookingService::new(Arc::new(Catalog::default_roster()));
    let date = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();

    let booked = service.book(&mut store, "2", "13:00", Some(date)).unwrap();

    assert_eq!(booked.doctor_id, "2");
    assert_eq!(booked.doctor_name, "Dr. Michael Chen");
    assert_eq!(booked.specialty, "Pediatrics");
    assert_eq!(booked.location, "Children's Hospital");
    assert_eq!(booked.date, "2024-05-17");
    assert_eq!(booked.calendar_date(), Some(date));
}

#[test]
fn test_booking_defaults_to_today() {
    let test_storage = TestStorage::new();
    let mut store = open_store(&test_storage, SlotPolicy::Exclusive);
    let service = BookingService::new(Arc::new(scenario_catalog()));

    let booked = service.book(&mut store, "B", "09:00", None).unwrap();

    assert!(booked.calendar_date().is_some(), "date should be YYYY-MM-DD: {}", booked.date);
}

#[test]
fn test_booking_rejects_unknown_doctor_and_foreign_slot() {
    let test_storage = TestStorage::new();
    let mut store = open_store(&test_storage, SlotPolicy::Exclusive);
    let service = BookingService::new(Arc::new(scenario_catalog()));

    assert_matches!(
        service.book(&mut store, "Z", "09:00", None),
        Err(AppointmentError::DoctorNotFound(id)) if id == "Z"
    );
    assert_matches!(
        service.book(&mut store, "B", "10:00", None),
        Err(AppointmentError::InvalidTime(_))
    );
    assert_matches!(
        service.book(&mut store, "A", "", None),
        Err(AppointmentError::InvalidTime(_))
    );
    assert!(store.is_empty());
}

#[test]
fn test_service_insert_validates_assembled_request() {
    let test_storage = TestStorage::new();
    let mut store = open_store(&test_storage, SlotPolicy::Exclusive);
    let service = BookingService::new(Arc::new(scenario_catalog()));
    let request = |doctor_id: &str, time: &str| NewAppointment {
        doctor_id: doctor_id.to_string(),
        doctor_name: "Dr. Test".to_string(),
        specialty: "Pediatrics".to_string(),
        date: "2024-06-11".to_string(),
        time: time.to_string(),
        location: "Test Clinic".to_string(),
    };

    assert_matches!(
        service.add_appointment(&mut store, request("B", "10:00")),
        Err(AppointmentError::InvalidTime(_))
    );
    assert_matches!(
        service.add_appointment(&mut store, request("Z", "09:00")),
        Err(AppointmentError::DoctorNotFound(_))
    );
    assert!(store.is_empty());

    assert!(service.add_appointment(&mut store, request("B", "09:00")).is_ok());
    assert!(store.is_slot_booked("B", "09:00"));
}

#[test]
fn test_second_booking_of_same_slot_is_rejected() {
    let test_storage = TestStorage::new();
    let mut store = open_store(&test_storage, SlotPolicy::Exclusive);
    let service = BookingService::new(Arc::new(scenario_catalog()));

    service.book(&mut store, "A", "10:00", None).unwrap();
    let again = service.book(&mut store, "A", "10:00", None);

    assert_matches!(again, Err(AppointmentError::SlotNotAvailable { .. }));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_slot_board_reflects_bookings() {
    let test_storage = TestStorage::new();
    let mut store = open_store(&test_storage, SlotPolicy::Exclusive);
    let service = BookingService::new(Arc::new(scenario_catalog()));

    let created = service.book(&mut store, "A", "10:00", None).unwrap();
    let board = service.slot_board(&store, "A").unwrap();
    assert_eq!(
        board.iter().map(|s| (s.time.as_str(), s.booked)).collect::<Vec<_>>(),
        vec![("09:00", false), ("10:00", true)]
    );

    store.remove_appointment(&created.id);
    let board = service.slot_board(&store, "A").unwrap();
    assert!(board.iter().all(|s| !s.booked));

    assert_matches!(service.slot_board(&store, "Z"), Err(AppointmentError::DoctorNotFound(_)));
}

#[test]
fn test_appointments_survive_reload() {
    let test_storage = TestStorage::new();
    let service = BookingService::new(Arc::new(scenario_catalog()));

    let (kept, removed) = {
        let mut store = open_store(&test_storage, SlotPolicy::Exclusive);
        let kept = service.book(&mut store, "A", "09:00", None).unwrap();
        let removed = service.book(&mut store, "B", "09:00", None).unwrap();
        store.remove_appointment(&removed.id);
        (kept, removed)
    };

    let reloaded = open_store(&test_storage, SlotPolicy::Exclusive);

    assert_eq!(reloaded.list(), &[kept]);
    assert!(reloaded.get(&removed.id).is_none());
    assert_eq!(reloaded.write_failures(), 0);
}

#[test]
fn test_persisted_layout_uses_camel_case() {
    let test_storage = TestStorage::new();
    let mut store = open_store(&test_storage, SlotPolicy::Exclusive);
    let service = BookingService::new(Arc::new(scenario_catalog()));
    service.book(&mut store, "A", "09:00", None).unwrap();

    let raw = test_storage.open().get_item(BOOKING_STORAGE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let first = &json["appointments"][0];
    assert_eq!(first["doctorId"], "A");
    assert_eq!(first["doctorName"], "Dr. A");
    assert_eq!(first["time"], "09:00");
}

#[test]
fn test_corrupt_file_loads_empty() {
    let test_storage = TestStorage::new();
    std::fs::write(test_storage.path().join("booking-storage.json"), "[[[").unwrap();

    let store = open_store(&test_storage, SlotPolicy::Exclusive);

    assert!(store.is_empty());
}

#[test]
fn test_browser_envelope_is_accepted() {
    let test_storage = TestStorage::new();
    let legacy = r#"{"state":{"appointments":[{"id":"1718000000000","doctorId":"1","doctorName":"Dr. Sarah Johnson","specialty":"Cardiology","date":"2024-06-10","time":"09:00","location":"Downtown Medical Center"}]},"version":0}"#;
    std::fs::write(test_storage.path().join("booking-storage.json"), legacy).unwrap();

    let mut store = open_store(&test_storage, SlotPolicy::Exclusive);

    assert_eq!(store.len(), 1);
    assert!(store.is_slot_booked("1", "09:00"));

    let next = store
        .add_appointment(NewAppointment {
            doctor_id: "1".to_string(),
            doctor_name: "Dr. Sarah Johnson".to_string(),
            specialty: "Cardiology".to_string(),
            date: "2024-06-10".to_string(),
            time: "10:00".to_string(),
            location: "Downtown Medical Center".to_string(),
        })
        .unwrap();
    assert!(next.id.parse::<i64>().unwrap() > 1_718_000_000_000);
}
