//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements         | Connects to                   |
//! |-------------|--------------------|-------------------------------|
//! | `hardware`  | ButtonPort         | button GPIOs (embedded-hal)   |
//! |             | IndicatorPort      | LED GPIOs + LEDC PWM          |
//! | `console`   | ConsolePort        | UART0 / in-memory simulation  |
//! | `log_store` | LogStorePort       | fixed-name file on SD card    |
//! | `log_sink`  | LogSink            | log store or console tags     |
//! | `time`      | —                  | monotonic milliseconds        |
//!
//! The motion sensor port is implemented directly by
//! [`Mpu6050`](crate::drivers::mpu6050::Mpu6050).

pub mod console;
pub mod hardware;
pub mod log_sink;
pub mod log_store;
pub mod time;
