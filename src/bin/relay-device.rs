//! Simulated ESP8266 that polls the relay for commands.
//!
//! Polls `GET /device/commands` on a fixed interval, applies each command
//! to a pair of virtual LEDs, and reports the resulting state through
//! `POST /device/status`. Stops on Ctrl+C.

use anyhow::Context;
use chrono::Utc;
use serde_json::json;

use ornament_relay::client::RelayClient;
use ornament_relay::config::DeviceConfig;
use ornament_relay::domain::{Command, DeviceId};
use ornament_relay::telemetry::init_tracing;

/// Virtual LED pair driven by command tokens.
#[derive(Debug, Default, Clone, Copy)]
struct Leds {
    led1: bool,
    led2: bool,
}

impl Leds {
    /// Applies `command`. Returns `false` for unknown tokens and non-string
    /// commands.
    fn apply(&mut self, command: &Command) -> bool {
        match command.as_str() {
            Some("led1_on") => self.led1 = true,
            Some("led1_off") => self.led1 = false,
            Some("led2_on") => self.led2 = true,
            Some("led2_off") => self.led2 = false,
            Some("both_on") => (self.led1, self.led2) = (true, true),
            Some("both_off") => (self.led1, self.led2) = (false, false),
            _ => return false,
        }
        true
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DeviceConfig::from_env();
    init_tracing(config.log_format);

    let device_id = DeviceId::parse(&config.device_id).context("DEVICE_ID must not be empty")?;
    let client = RelayClient::new(&config.relay_url);
    let mut leds = Leds::default();
    let mut ticker = tokio::time::interval(config.poll_interval);

    tracing::info!(
        relay = client.base_url(),
        device_id = %device_id,
        interval_secs = config.poll_interval.as_secs(),
        "device simulator started"
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => poll_once(&client, &device_id, &mut leds).await,
            result = tokio::signal::ctrl_c() => {
                result.context("failed to listen for Ctrl+C")?;
                break;
            }
        }
    }

    tracing::info!("device simulator stopped");
    Ok(())
}

/// One poll cycle. Failures are logged; the next tick retries.
async fn poll_once(client: &RelayClient, device_id: &DeviceId, leds: &mut Leds) {
    let command = match client.poll_command(device_id).await {
        Ok(Some(command)) => command,
        Ok(None) => return,
        Err(e) => {
            tracing::warn!(error = %e, "poll failed");
            return;
        }
    };

    if !leds.apply(&command) {
        tracing::warn!(command = %command, "ignoring unknown command");
        return;
    }
    tracing::info!(command = %command, led1 = leds.led1, led2 = leds.led2, "command applied");

    let status = json!({
        "deviceId": device_id,
        "lastCommand": command,
        "led1": leds.led1,
        "led2": leds.led2,
        "reportedAt": Utc::now(),
    });
    if let Err(e) = client.report_status(&status).await {
        tracing::warn!(error = %e, "status report failed");
    }
}
