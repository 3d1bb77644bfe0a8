pub mod collision;
pub mod kinematics;
