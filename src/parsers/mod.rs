pub mod follow_trajectory;
pub mod types;

pub use follow_trajectory::{FollowTrajectory, LineMiss, LineOutcome};
pub use types::{AlignedRecord, ExtractedLog, Joint, JointVector, Parseable, JOINT_COUNT};
