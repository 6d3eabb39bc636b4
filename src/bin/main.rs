#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use embassy_executor::Spawner;
use embassy_time::Timer;
use esp_hal::{
    clock::CpuClock,
    gpio::{Input, InputConfig, Pull},
    i2c::master::{Config as I2cConfig, I2c},
    time::{Instant, Rate},
    timer::timg::TimerGroup,
};
use fanpanel_core::{
    app::{HmiApp, HmiConfig, TickResult},
    settings::Settings,
    telemetry::DemoTelemetry,
};
use fanpanel_hal_esp32s3::{
    input::buttons::{ButtonConfig, ButtonPanel},
    platform::display::{DisplayError, OledDisplay},
    render::{FrameRenderer, oled::OledRenderer},
};
use log::{LevelFilter, info};
use ssd1306::prelude::DisplayRotation;

use control_sync::ControlSync;

#[path = "main/control_sync.rs"]
mod control_sync;

const DISPLAY_I2C_KHZ: u32 = 400;
const MENU_TIMEOUT_MS: u32 = 60_000;
const FRAME_PERIOD_MS: u32 = 25;

#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

async fn halt() -> ! {
    loop {
        Timer::after_secs(1).await;
    }
}

#[allow(
    clippy::large_stack_frames,
    reason = "it's not unusual to allocate larger buffers etc. in main"
)]
#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    esp_println::logger::init_logger(LevelFilter::Info);
    esp_println::println!("boot: fanpanel starting");

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Wiring used by the panel board:
    // buttons UP=GPIO4 DOWN=GPIO5 ENTER=GPIO6 ESC=GPIO7 (to GND, pulled up)
    // SSD1306 on I2C0 SDA=GPIO8 SCL=GPIO9
    let i2c_config = I2cConfig::default().with_frequency(Rate::from_khz(DISPLAY_I2C_KHZ));
    let i2c = match I2c::new(peripherals.I2C0, i2c_config) {
        Ok(i2c) => i2c.with_sda(peripherals.GPIO8).with_scl(peripherals.GPIO9),
        Err(err) => {
            info!("display: i2c config rejected: {:?}", err);
            halt().await
        }
    };

    let mut display = OledDisplay::new(i2c, DisplayRotation::Rotate180);
    let mut display_fault_logged = false;
    if let Err(err) = display.initialize() {
        esp_println::println!("display: initialize failed");
        info!("display initialize failed: {:?}", err);
        display_fault_logged = true;
    } else {
        esp_println::println!("display: initialize ok");
    }

    let input_cfg = InputConfig::default().with_pull(Pull::Up);
    let buttons = ButtonPanel::new(
        Input::new(peripherals.GPIO4, input_cfg),
        Input::new(peripherals.GPIO5, input_cfg),
        Input::new(peripherals.GPIO6, input_cfg),
        Input::new(peripherals.GPIO7, input_cfg),
        ButtonConfig::default(),
    );

    let hmi_config = HmiConfig::default()
        .with_menu_timeout_ms(MENU_TIMEOUT_MS)
        .with_frame_period_ms(FRAME_PERIOD_MS);
    let mut app = HmiApp::new(buttons, DemoTelemetry::new(), Settings::factory(), hmi_config);
    let mut control = ControlSync::new(app.config_epoch(), *app.live_settings());
    let mut renderer = OledRenderer::new();

    info!(
        "ui: ready menu_timeout_ms={} frame_period_ms={}",
        app.config().menu_timeout_ms,
        app.config().frame_period_ms
    );

    let loop_start = Instant::now();
    loop {
        // Wraps after ~49 days; the core compares timestamps with wrapping math.
        let now_ms = loop_start.elapsed().as_millis() as u32;

        if app.tick(now_ms) == TickResult::RenderRequested {
            let mut drawn = Ok(());
            app.with_screen(|screen| drawn = renderer.render(screen, display.canvas()));

            if let Err(err) = drawn
                .map_err(DisplayError::Flush)
                .and_then(|()| display.flush())
                && !display_fault_logged
            {
                esp_println::println!("display: frame flush failed");
                info!("display frame flush failed: {:?}", err);
                display_fault_logged = true;
            }
        }

        control.observe(app.config_epoch(), app.live_settings());

        Timer::after_millis(1).await;
    }
}
