//! Peripheral drivers: button edge detection, status LEDs, motion sensor.

pub mod button;
pub mod mpu6050;
pub mod status_led;
