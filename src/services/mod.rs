pub mod attendances;
pub mod courses;
pub mod students;

pub use attendances::AttendanceService;
pub use courses::CourseService;
pub use students::StudentService;
