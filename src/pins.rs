//! GPIO / peripheral pin assignments for the PawLog collar board.
//!
//! `main` wires peripherals from these numbers and logs them at boot.

// ---------------------------------------------------------------------------
// Buttons (active HIGH, external pull-down)
// ---------------------------------------------------------------------------

/// Momentary push-button that toggles Sync mode.
pub const SYNC_BUTTON_GPIO: i32 = 4;
/// Momentary push-button that toggles Sleep mode.
pub const SLEEP_BUTTON_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Status LEDs
// ---------------------------------------------------------------------------

/// Digital output: lit while Sync mode is active.
pub const SYNC_LED_GPIO: i32 = 6;
/// Digital output: lit while Sleep mode is active.
pub const SLEEP_LED_GPIO: i32 = 7;
/// LEDC PWM output: brightness follows the latest activity step.
pub const ACTIVITY_LED_GPIO: i32 = 8;

/// LEDC frequency for the activity LED (1 kHz).
pub const ACTIVITY_LED_PWM_FREQ_HZ: u32 = 1_000;

// ---------------------------------------------------------------------------
// SD card (SPI)
// ---------------------------------------------------------------------------

pub const SD_CS_GPIO: i32 = 10;
pub const SD_MOSI_GPIO: i32 = 11;
pub const SD_SCLK_GPIO: i32 = 12;
pub const SD_MISO_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// I²C bus (motion sensor)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 1;
pub const I2C_SCL_GPIO: i32 = 2;

/// 7-bit address of the MPU-6050 (AD0 tied low).
pub const MPU6050_I2C_ADDR: u8 = 0x68;

// ---------------------------------------------------------------------------
// UART console
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 43;
pub const UART_RX_GPIO: i32 = 44;
