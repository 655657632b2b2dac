pub mod activity;
pub mod day_record;
pub mod raw_event;
pub mod stats;
pub mod summary;

pub use activity::{ActivityEntry, ActivityKind, RecentActivity};
pub use day_record::{DayRecord, DayStatus};
pub use raw_event::{AttendanceRecordDto, RawAttendanceEvent};
pub use stats::{CurrentStatus, WeeklyStats};
pub use summary::{MonthSummary, PeriodTotals, WeekSummary};
