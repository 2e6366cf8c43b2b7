/// Controls how click events propagate and trigger default behaviors.
pub mod click_behavior;
