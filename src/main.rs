//! PawLog Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │                                                              │
//! │  HardwareAdapter   Mpu6050        SerialConsole  FileLogStore │
//! │  (Button+LEDs)     (MotionSensor) (Console)      (LogStore)   │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ────────────────        │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │            ModeController (pure logic)                 │  │
//! │  │  FSM · debounce · sample throttle · session            │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{info, warn};

use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, InputPin, OutputPin, PinDriver};
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::ledc::{LedcDriver, LedcTimerDriver, config::TimerConfig};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::spi::{SpiDriver, SpiDriverConfig};
use esp_idf_hal::uart::{UartDriver, config::Config as UartConfig};
use esp_idf_hal::units::Hertz;
use esp_idf_svc::fs::fatfs::Fatfs;
use esp_idf_svc::io::vfs::MountedFatfs;
use esp_idf_svc::sd::spi::SdSpiHostDriver;
use esp_idf_svc::sd::{SdCardConfiguration, SdCardDriver};

use pawlog::adapters::console::SerialConsole;
use pawlog::adapters::hardware::HardwareAdapter;
use pawlog::adapters::log_sink::BackendLogSink;
use pawlog::adapters::log_store::FileLogStore;
use pawlog::adapters::time::MonotonicClock;
use pawlog::app::service::ModeController;
use pawlog::config::{LogBackend, LoggerConfig, SD_MOUNT_POINT};
use pawlog::drivers::mpu6050::Mpu6050;
use pawlog::drivers::status_led::StatusLeds;
use pawlog::pins;

/// Maximum files open at once on the card.
const SD_MAX_OPEN_FILES: usize = 4;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("PawLog v{}", env!("CARGO_PKG_VERSION"));

    let config = LoggerConfig::default();
    config.validate()?;

    let peripherals = Peripherals::take()?;
    // esp-idf-hal pins are distinct types, so the `p.gpioN` fields below are
    // spelled out by hand.  Keep them in step with `pins`, whose values are
    // what the boot log reports.
    let p = peripherals.pins;

    // ── 2. Buttons and LEDs ───────────────────────────────────
    info!(
        "Pins: sync btn={} sleep btn={} sync led={} sleep led={} activity led={}",
        pins::SYNC_BUTTON_GPIO,
        pins::SLEEP_BUTTON_GPIO,
        pins::SYNC_LED_GPIO,
        pins::SLEEP_LED_GPIO,
        pins::ACTIVITY_LED_GPIO
    );
    let sync_button = PinDriver::input(p.gpio4.downgrade_input())?;
    let sleep_button = PinDriver::input(p.gpio5.downgrade_input())?;
    let sync_led = PinDriver::output(p.gpio6.downgrade_output())?;
    let sleep_led = PinDriver::output(p.gpio7.downgrade_output())?;

    let ledc_timer = LedcTimerDriver::new(
        peripherals.ledc.timer0,
        &TimerConfig::default().frequency(Hertz(pins::ACTIVITY_LED_PWM_FREQ_HZ)),
    )?;
    let activity_led = LedcDriver::new(peripherals.ledc.channel0, &ledc_timer, p.gpio8)?;

    let mut hw = HardwareAdapter::new(
        sync_button,
        sleep_button,
        StatusLeds::new(sync_led, sleep_led, activity_led),
    );

    // ── 3. Motion sensor ──────────────────────────────────────
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        p.gpio1,
        p.gpio2,
        &I2cConfig::new().baudrate(Hertz(config.i2c_baud_hz)),
    )?;
    info!(
        "I2C: sda={} scl={} addr=0x{:02x}",
        pins::I2C_SDA_GPIO,
        pins::I2C_SCL_GPIO,
        pins::MPU6050_I2C_ADDR
    );
    let mut sensor = Mpu6050::new(i2c, pins::MPU6050_I2C_ADDR);
    if let Err(e) = sensor.init() {
        // Keep going: every sample will fail and be skipped until the
        // sensor answers.
        warn!("Motion sensor init failed: {}", e);
    }

    // ── 4. Console ────────────────────────────────────────────
    let uart = UartDriver::new(
        peripherals.uart0,
        p.gpio43,
        p.gpio44,
        Option::<AnyIOPin>::None,
        Option::<AnyIOPin>::None,
        &UartConfig::default().baudrate(Hertz(config.console_baud)),
    )?;
    let mut console = SerialConsole::new(uart);
    info!(
        "Console: tx={} rx={} at {} baud",
        pins::UART_TX_GPIO,
        pins::UART_RX_GPIO,
        config.console_baud
    );

    // ── 5. Persisted log on the SD card ───────────────────────
    info!(
        "SD: cs={} mosi={} sclk={} miso={}",
        pins::SD_CS_GPIO,
        pins::SD_MOSI_GPIO,
        pins::SD_SCLK_GPIO,
        pins::SD_MISO_GPIO
    );
    let mounted = (|| -> Result<_> {
        let spi = SpiDriver::new(
            peripherals.spi2,
            p.gpio12,
            p.gpio11,
            Some(p.gpio13),
            &SpiDriverConfig::default(),
        )?;
        let host = SdSpiHostDriver::new(
            spi,
            Some(p.gpio10),
            AnyIOPin::none(),
            AnyIOPin::none(),
            AnyIOPin::none(),
            None,
        )?;
        let card = SdCardDriver::new_spi(host, &SdCardConfiguration::new())?;
        let fatfs = Fatfs::new_sdcard(0, card)?;
        Ok(MountedFatfs::mount(fatfs, SD_MOUNT_POINT, SD_MAX_OPEN_FILES)?)
    })();

    // Held for the program's lifetime; dropping it unmounts the card.
    let (store, _sd_mount) = match mounted {
        Ok(m) => {
            info!("SD card mounted at {}", SD_MOUNT_POINT);
            (FileLogStore::open(SD_MOUNT_POINT), Some(m))
        }
        Err(e) => {
            warn!("SD card unavailable ({}), log storage disabled", e);
            (FileLogStore::unavailable(), None)
        }
    };

    let mut sink = BackendLogSink::from_backend(config.log_backend, store);
    if let BackendLogSink::Storage(storage) = &mut sink {
        if !storage.store().is_available() {
            warn!("Log lines will only reach the serial log");
        }
        match storage.line_count() {
            Ok(n) => info!("Persisted log holds {} line(s)", n),
            Err(e) => warn!("Persisted log unreadable: {}", e),
        }
    }
    if config.log_backend == LogBackend::Console {
        info!("Logging to console tags only");
    }

    // ── 6. Controller + main loop ─────────────────────────────
    let clock = MonotonicClock::new();
    let mut controller = ModeController::new(config);
    controller.start(&mut hw);

    let loop_ms = controller.config().loop_interval_ms;
    loop {
        controller.tick(clock.now_ms(), &mut hw, &mut sensor, &mut console, &mut sink);
        FreeRtos::delay_ms(loop_ms);
    }
}
