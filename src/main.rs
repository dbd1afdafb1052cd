// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board bring-up and the cooperative main loop.
//!
//! The default build runs the attack grid: RGB matrix on the 74HC595 chain, photodiodes on one
//! MCP3008, baseline-deviation sensing. With `--features arrange-grid` the same board reads the
//! row and column beams from two MCP3008s and drives no display.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod app {
    use core::cell::RefCell;

    use cortex_m_rt::entry;
    use defmt_rtt as _;
    use panic_halt as _;

    use hal::{
        pac,
        prelude::*,
        serial::{Config, Serial},
        spi::{Mode, Phase, Polarity, Spi},
    };
    use stm32f7xx_hal as hal;

    use battleship_hid::config::{ScanConfig, BAUD_RATE, HEARTBEAT_FRAMES};
    use battleship_hid::drivers::Mcp3008;
    use battleship_hid::hw::{
        ActiveLevel, BoardPins, ChipSelect, MicrosClock, SpiBus, StatusLed, Usart,
    };
    use battleship_hid::scan::Scanner;

    #[cfg(not(feature = "arrange-grid"))]
    use battleship_hid::{drivers::RgbMatrix, sense::BaselineDeviation};
    #[cfg(feature = "arrange-grid")]
    use battleship_hid::{
        io::{BankPair, NoDisplay},
        sense::{BeamBreak, EdgeComparator},
    };

    #[entry]
    fn main() -> ! {
        // Peripherals
        let dp = pac::Peripherals::take().unwrap();
        let cp = cortex_m::Peripherals::take().unwrap();

        // Clocks
        let rcc = dp.RCC.constrain();
        let clocks = rcc.cfgr.freeze();
        let mut apb2 = rcc.apb2;

        // GPIO
        let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC, dp.GPIOD);
        let mut heartbeat = StatusLed::new(pins.leds.green, ActiveLevel::High, HEARTBEAT_FRAMES);

        // USART3 (host link)
        let usart_cfg = Config {
            baud_rate: BAUD_RATE.bps(),
            ..Default::default()
        };
        let serial = Serial::new(
            dp.USART3,
            (pins.usart3.tx, pins.usart3.rx),
            &clocks,
            usart_cfg,
        );
        let (tx, mut rx) = Usart::new(serial).split();

        // SPI1, mode 0 for both the 74HC595 and the MCP3008
        let spi_mode = Mode {
            polarity: Polarity::IdleLow,
            phase: Phase::CaptureOnFirstTransition,
        };
        let spi1_raw = Spi::new(dp.SPI1, (pins.spi1.sck, pins.spi1.miso, pins.spi1.mosi));
        let spi1_enabled = spi1_raw.enable::<u8>(spi_mode, 1_000.kHz(), &clocks, &mut apb2);
        let spi_bus = RefCell::new(SpiBus::new(spi1_enabled));

        // Timing
        let clock = MicrosClock::tim5(dp.TIM5, clocks.timclk1().raw());
        let mut delay = cortex_m::delay::Delay::new(cp.SYST, clocks.sysclk().raw());

        #[cfg(not(feature = "arrange-grid"))]
        let mut scanner = {
            let config = ScanConfig::default();
            let matrix = RgbMatrix::new(&spi_bus, ChipSelect::active_low(pins.cs.matrix));
            let photodiodes = Mcp3008::new(&spi_bus, ChipSelect::active_low(pins.cs.adc_rows));
            let policy = BaselineDeviation::new(config.deviation_threshold);
            defmt::info!("attack grid up");
            Scanner::<_, _, _, _, 8, 8>::new(matrix, photodiodes, tx, policy, &config)
        };

        #[cfg(feature = "arrange-grid")]
        let mut scanner = {
            let config = ScanConfig::default().with_settle_us(0);
            let rows = Mcp3008::new(&spi_bus, ChipSelect::active_low(pins.cs.adc_rows));
            let columns = Mcp3008::new(&spi_bus, ChipSelect::active_low(pins.cs.adc_columns));
            let prototype = EdgeComparator::with_hysteresis(0, u8::MAX, config.hysteresis);
            let policy = BeamBreak::<8, 8>::new(prototype);
            defmt::info!("arrangement grid up");
            Scanner::<_, _, _, _, 8, 8>::new(
                NoDisplay,
                BankPair::new(rows, columns),
                tx,
                policy,
                &config,
            )
        };

        loop {
            while let Some(byte) = rx.read_byte() {
                scanner.on_byte(byte);
            }

            if let Some(step) = scanner.poll(clock.now_us(), &mut delay) {
                if step.frame_done {
                    heartbeat.frame();
                }
            }
        }
    }
}

#[cfg(not(target_os = "none"))]
fn main() {}
