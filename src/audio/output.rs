// SPDX-License-Identifier: MPL-2.0
//! Chime playback through cpal.
//!
//! A `cpal::Stream` must stay on the thread that created it on some
//! platforms, so the stream lives on a dedicated audio thread. The UI sends
//! [`ChimeCommand`]s over a channel and receives a start signal per chime.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use futures_util::future::{BoxFuture, FutureExt};
use std::sync::{Arc, Mutex};
use std::thread;
use tokio::sync::{mpsc, oneshot};

use super::synth::render_chime;
use super::Chime;
use crate::domain::audio::Tone;
use crate::error::{Error, Result};

/// Commands handled by the audio thread.
#[derive(Debug)]
enum ChimeCommand {
    /// Queue one chime; `started` resolves once it is handed to the device.
    Ring { started: oneshot::Sender<Result<()>> },
}

/// Pending interleaved samples, drained by the device callback.
type SampleQueue = Arc<Mutex<Vec<f32>>>;

/// Chime played on the system's default output device.
///
/// The device is opened on first use; if that fails the error is returned for
/// that playback and the next playback tries again.
#[derive(Debug)]
pub struct DeviceChime {
    command_tx: mpsc::UnboundedSender<ChimeCommand>,
}

impl DeviceChime {
    /// Spawns the audio thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn new(tone: Tone) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        thread::Builder::new()
            .name("chime-audio".to_string())
            .spawn(move || run_audio_thread(tone, command_rx))
            .map_err(|e| Error::Audio(format!("Failed to spawn audio thread: {e}")))?;

        Ok(Self { command_tx })
    }
}

impl Chime for DeviceChime {
    fn play(&self) -> BoxFuture<'static, Result<()>> {
        let (started_tx, started_rx) = oneshot::channel();
        let sent = self
            .command_tx
            .send(ChimeCommand::Ring {
                started: started_tx,
            })
            .map_err(|_| Error::Audio("Audio thread stopped".to_string()));

        async move {
            sent?;
            started_rx
                .await
                .map_err(|_| Error::Audio("Audio thread dropped the chime".to_string()))?
        }
        .boxed()
    }
}

fn run_audio_thread(tone: Tone, mut command_rx: mpsc::UnboundedReceiver<ChimeCommand>) {
    let mut output: Option<OutputStream> = None;

    while let Some(command) = command_rx.blocking_recv() {
        match command {
            ChimeCommand::Ring { started } => {
                if output.is_none() {
                    match OutputStream::open() {
                        Ok(stream) => output = Some(stream),
                        Err(err) => {
                            let _ = started.send(Err(err));
                            continue;
                        }
                    }
                }

                let result = match output.as_ref() {
                    Some(stream) => stream.ring(&tone),
                    None => Err(Error::Audio("No audio output".to_string())),
                };
                if result.is_err() {
                    // Reopen on the next chime; the device may have gone away.
                    output = None;
                }
                let _ = started.send(result);
            }
        }
    }
}

/// An open output stream and its sample queue.
struct OutputStream {
    queue: SampleQueue,
    sample_rate: u32,
    channels: u16,
    _stream: cpal::Stream,
}

impl OutputStream {
    fn open() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Audio("No audio output device found".to_string()))?;

        let supported_config = device
            .default_output_config()
            .map_err(|e| Error::Audio(format!("Failed to get audio config: {e}")))?;

        let sample_rate = supported_config.sample_rate().0;
        let channels = supported_config.channels();
        let config: cpal::StreamConfig = supported_config.config();

        let queue: SampleQueue = Arc::new(Mutex::new(Vec::new()));

        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config, Arc::clone(&queue))?,
            cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config, Arc::clone(&queue))?,
            cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config, Arc::clone(&queue))?,
            _ => return Err(Error::Audio("Unsupported audio sample format".to_string())),
        };

        stream
            .play()
            .map_err(|e| Error::Audio(format!("Failed to start audio stream: {e}")))?;

        Ok(Self {
            queue,
            sample_rate,
            channels,
            _stream: stream,
        })
    }

    /// Replaces whatever is still queued with a fresh chime.
    fn ring(&self, tone: &Tone) -> Result<()> {
        let samples = render_chime(tone, self.sample_rate, self.channels);
        let mut queue = self
            .queue
            .lock()
            .map_err(|_| Error::Audio("Audio queue poisoned".to_string()))?;
        queue.clear();
        queue.extend_from_slice(&samples);
        Ok(())
    }
}

fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    queue: SampleQueue,
) -> Result<cpal::Stream> {
    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                let Ok(mut pending) = queue.lock() else {
                    for sample in data.iter_mut() {
                        *sample = T::from_sample(0.0f32);
                    }
                    return;
                };

                for (i, sample) in data.iter_mut().enumerate() {
                    // dasp's from_sample overflows at exactly 1.0 for i16.
                    let value = pending.get(i).map_or(0.0, |v| v.clamp(-1.0, 0.999_999_9));
                    *sample = T::from_sample(value);
                }

                let consumed = data.len().min(pending.len());
                pending.drain(..consumed);
            },
            |err| {
                eprintln!("Audio output error: {err}");
            },
            None,
        )
        .map_err(|e| Error::Audio(format!("Failed to build audio stream: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires an audio output device"]
    async fn device_chime_starts_playback() {
        let chime = DeviceChime::new(Tone::default()).expect("spawn audio thread");
        chime.play().await.expect("chime should start");
    }

    #[tokio::test]
    async fn play_reports_error_when_thread_is_gone() {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        drop(command_rx);
        let chime = DeviceChime { command_tx };

        let result = chime.play().await;
        assert!(matches!(result, Err(Error::Audio(_))));
    }
}
