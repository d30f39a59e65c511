//! MPU-6050 accelerometer / gyroscope driver.
//!
//! Register-level driver over any `embedded_hal::i2c::I2c` bus.  Only the
//! two things the logger needs are implemented: waking the device and
//! burst-reading the 14-byte accel + temperature + gyro block.
//!
//! ```text
//!  0x3B ACCEL_XOUT_H ┐
//!       ...          │ 7 × big-endian i16
//!  0x48 GYRO_ZOUT_L  ┘
//! ```

use embedded_hal::i2c::I2c;
use log::info;

use crate::activity::{MOTION_FRAME_WORDS, MotionFrame};
use crate::app::ports::MotionSensorPort;
use crate::error::SensorError;

const REG_ACCEL_XOUT_H: u8 = 0x3B;
const REG_PWR_MGMT_1: u8 = 0x6B;
const REG_WHO_AM_I: u8 = 0x75;
const WHO_AM_I_EXPECTED: u8 = 0x68;

pub struct Mpu6050<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Mpu6050<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Check identity and clear the SLEEP bit so the device starts sampling.
    pub fn init(&mut self) -> Result<(), SensorError> {
        let mut id = [0u8; 1];
        self.i2c
            .write_read(self.address, &[REG_WHO_AM_I], &mut id)
            .map_err(bus_error)?;
        if id[0] != WHO_AM_I_EXPECTED {
            return Err(SensorError::UnexpectedDevice(id[0]));
        }
        self.i2c
            .write(self.address, &[REG_PWR_MGMT_1, 0x00])
            .map_err(bus_error)?;
        info!("MPU6050 awake at 0x{:02x}", self.address);
        Ok(())
    }

    /// Burst-read all seven words starting at ACCEL_XOUT_H.
    pub fn read_frame(&mut self) -> Result<MotionFrame, SensorError> {
        let mut raw = [0u8; MOTION_FRAME_WORDS * 2];
        self.i2c
            .write_read(self.address, &[REG_ACCEL_XOUT_H], &mut raw)
            .map_err(bus_error)?;

        let mut words = [0i16; MOTION_FRAME_WORDS];
        for (word, bytes) in words.iter_mut().zip(raw.chunks_exact(2)) {
            *word = i16::from_be_bytes([bytes[0], bytes[1]]);
        }
        Ok(MotionFrame::new(words))
    }

    /// Give the bus back (used by tests and on shutdown).
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> MotionSensorPort for Mpu6050<I2C> {
    fn read_motion(&mut self) -> Result<MotionFrame, SensorError> {
        self.read_frame()
    }
}

fn bus_error<E: embedded_hal::i2c::Error>(e: E) -> SensorError {
    SensorError::Bus(e.kind())
}
