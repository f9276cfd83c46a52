//! Stateless record-keeping rules: marks derivation, attendance rosters and
//! form validation. Nothing in here touches the database.

pub mod attendance;
pub mod forms;
pub mod marks;

pub use attendance::{AttendanceBatch, AttendanceEntry, AttendanceStatus};
pub use forms::{FormError, NewAccount, NewStudent, SigninForm, SignupForm, StudentForm};
pub use marks::{Grade, MarksForm, Marksheet, SubjectScores};
