//! Outcome - Four-way call result classification

use serde::{Deserialize, Serialize};

use crate::domain::entities::CallRecord;

/// Cross of AI interest and appointment booked. The four variants form an
/// exhaustive, disjoint partition: every record lands in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    InterestAndAppointment,
    InterestOnly,
    AppointmentOnly,
    NoInterest,
}

impl Outcome {
    /// Pie-chart bucket order.
    pub const CHART_ORDER: [Outcome; 4] = [
        Outcome::InterestAndAppointment,
        Outcome::InterestOnly,
        Outcome::AppointmentOnly,
        Outcome::NoInterest,
    ];

    /// Scatter-chart bucket order, walking the (x, y) grid.
    pub const SCATTER_ORDER: [Outcome; 4] = [
        Outcome::NoInterest,
        Outcome::InterestOnly,
        Outcome::AppointmentOnly,
        Outcome::InterestAndAppointment,
    ];

    /// Classify a record.
    pub fn of(record: &CallRecord) -> Self {
        match (record.ai_interest, record.appointment_booked) {
            (true, true) => Outcome::InterestAndAppointment,
            (true, false) => Outcome::InterestOnly,
            (false, true) => Outcome::AppointmentOnly,
            (false, false) => Outcome::NoInterest,
        }
    }

    /// Fixed pie-chart label.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::InterestAndAppointment => "AI Interest + Appointment",
            Outcome::InterestOnly => "AI Interest Only",
            Outcome::AppointmentOnly => "Appointment Only",
            Outcome::NoInterest => "No Interest",
        }
    }

    /// Fixed scatter-chart label.
    pub fn scatter_label(&self) -> &'static str {
        match self {
            Outcome::InterestAndAppointment => "AI Interest + Appointment",
            Outcome::InterestOnly => "AI Interest, No Appointment",
            Outcome::AppointmentOnly => "No AI Interest, Has Appointment",
            Outcome::NoInterest => "No Interest, No Appointment",
        }
    }

    /// Fixed chart color.
    pub fn color(&self) -> &'static str {
        match self {
            Outcome::InterestAndAppointment => "#22c55e",
            Outcome::InterestOnly => "#3b82f6",
            Outcome::AppointmentOnly => "#f59e0b",
            Outcome::NoInterest => "#ef4444",
        }
    }

    /// Scatter position: x = AI interest, y = appointment booked.
    pub fn coordinates(&self) -> (u8, u8) {
        match self {
            Outcome::InterestAndAppointment => (1, 1),
            Outcome::InterestOnly => (1, 0),
            Outcome::AppointmentOnly => (0, 1),
            Outcome::NoInterest => (0, 0),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
