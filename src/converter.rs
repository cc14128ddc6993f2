//! Conversion Coordinator - UI State Around a Single Remote Call
//!
//! The coordinator never talks to the network itself. It hands a
//! `ConvertRequest` to a `ConversionClient` and folds the response back
//! into its state. Each call is tagged with a sequence number; a response
//! is applied only if no newer call has been issued since.

use base64::Engine;
use log::{debug, warn};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

use crate::constants::QUALITY_DEFAULT;
use crate::presets::ConversionPreset;

pub const CONVERSION_FAILED: &str = "Conversion failed";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("{0}")]
    Request(String),

    #[error("Conversion request failed without a message")]
    Unknown,
}

impl ClientError {
    /// The text shown to the user; empty or missing messages get the fallback.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Request(message) if !message.is_empty() => message.clone(),
            _ => CONVERSION_FAILED.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    /// Base64-encoded source image
    pub original: String,
    pub filename: String,
    pub quality: u8,
    pub transparent_bg: bool,
}

impl ConvertRequest {
    pub fn from_bytes(image: &[u8], filename: &str, quality: u8, transparent_bg: bool) -> Self {
        Self {
            original: base64::engine::general_purpose::STANDARD.encode(image),
            filename: filename.to_string(),
            quality,
            transparent_bg,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConvertData {
    pub svg: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConvertResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<ConvertData>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ConvertResponse {
    pub fn converted(svg: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(ConvertData { svg: svg.into() }),
            error: None,
        }
    }

    pub fn rejected(error: Option<String>) -> Self {
        Self {
            success: false,
            data: None,
            error,
        }
    }
}

/// The external API client that performs the actual conversion
pub trait ConversionClient: Send + Sync {
    fn convert(
        &self,
        request: ConvertRequest,
    ) -> impl Future<Output = Result<ConvertResponse, ClientError>> + Send;
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConversionPhase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// How a finished `convert` call affected the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertOutcome {
    Succeeded,
    Failed,
    /// A newer conversion was issued while this one was in flight; its
    /// response was dropped.
    Stale,
}

/// Snapshot handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageConverterState {
    pub quality: u8,
    pub transparent_bg: bool,
    pub svg_result: Option<String>,
    pub error: Option<String>,
    pub is_converting: bool,
}

#[derive(Debug)]
struct Inner {
    quality: u8,
    transparent_bg: bool,
    svg_result: Option<String>,
    error: Option<String>,
    phase: ConversionPhase,
    latest_seq: u64,
}

pub struct ImageConverter<C> {
    client: C,
    inner: Mutex<Inner>,
}

impl<C: ConversionClient> ImageConverter<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            inner: Mutex::new(Inner {
                quality: QUALITY_DEFAULT,
                transparent_bg: false,
                svg_result: None,
                error: None,
                phase: ConversionPhase::Idle,
                latest_seq: 0,
            }),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn state(&self) -> ImageConverterState {
        let inner = self.inner.lock();
        ImageConverterState {
            quality: inner.quality,
            transparent_bg: inner.transparent_bg,
            svg_result: inner.svg_result.clone(),
            error: inner.error.clone(),
            is_converting: inner.phase == ConversionPhase::Pending,
        }
    }

    pub fn phase(&self) -> ConversionPhase {
        self.inner.lock().phase
    }

    pub fn quality(&self) -> u8 {
        self.inner.lock().quality
    }

    pub fn transparent_bg(&self) -> bool {
        self.inner.lock().transparent_bg
    }

    pub fn svg_result(&self) -> Option<String> {
        self.inner.lock().svg_result.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.inner.lock().error.clone()
    }

    pub fn is_converting(&self) -> bool {
        self.phase() == ConversionPhase::Pending
    }

    /// No range check; callers clamp to `QUALITY_MIN..=QUALITY_MAX`.
    pub fn set_quality(&self, quality: u8) {
        self.inner.lock().quality = quality;
    }

    pub fn set_transparent_bg(&self, transparent_bg: bool) {
        self.inner.lock().transparent_bg = transparent_bg;
    }

    pub fn apply_preset(&self, preset: &ConversionPreset) {
        let mut inner = self.inner.lock();
        inner.quality = preset.quality;
        inner.transparent_bg = preset.transparent_bg;
    }

    /// Clears the result and error. An in-flight conversion keeps running.
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.svg_result = None;
        inner.error = None;
        if inner.phase != ConversionPhase::Pending {
            inner.phase = ConversionPhase::Idle;
        }
    }

    /// Converts base64 image data with the current quality and background settings.
    pub async fn convert(&self, image_base64: &str, filename: &str) -> ConvertOutcome {
        let (seq, request) = {
            let mut inner = self.inner.lock();
            inner.error = None;
            inner.latest_seq += 1;
            inner.phase = ConversionPhase::Pending;
            let request = ConvertRequest {
                original: image_base64.to_string(),
                filename: filename.to_string(),
                quality: inner.quality,
                transparent_bg: inner.transparent_bg,
            };
            (inner.latest_seq, request)
        };
        let mut in_flight = InFlight {
            inner: &self.inner,
            seq,
            settled: false,
        };

        debug!(
            "conversion #{} issued for {} (quality {}, transparent {})",
            seq, request.filename, request.quality, request.transparent_bg
        );
        let response = self.client.convert(request).await;
        in_flight.settled = true;
        self.settle(seq, response)
    }

    /// Like `convert`, encoding raw image bytes first.
    pub async fn convert_bytes(&self, image: &[u8], filename: &str) -> ConvertOutcome {
        let encoded = base64::engine::general_purpose::STANDARD.encode(image);
        self.convert(&encoded, filename).await
    }

    fn settle(&self, seq: u64, response: Result<ConvertResponse, ClientError>) -> ConvertOutcome {
        let mut inner = self.inner.lock();
        if seq != inner.latest_seq {
            debug!(
                "dropping response for conversion #{}, #{} is newer",
                seq, inner.latest_seq
            );
            return ConvertOutcome::Stale;
        }

        let failure = match response {
            Ok(ConvertResponse {
                success: true,
                data: Some(data),
                ..
            }) => {
                debug!("conversion #{} produced {} bytes of SVG", seq, data.svg.len());
                inner.svg_result = Some(data.svg);
                inner.phase = ConversionPhase::Succeeded;
                return ConvertOutcome::Succeeded;
            }
            Ok(response) => response
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| CONVERSION_FAILED.to_string()),
            Err(err) => err.user_message(),
        };

        warn!("conversion #{} failed: {}", seq, failure);
        inner.error = Some(failure);
        inner.phase = ConversionPhase::Failed;
        ConvertOutcome::Failed
    }
}

/// Returns an abandoned conversion to `Idle` when its future is dropped
/// before the client answers, unless a newer conversion owns the phase.
struct InFlight<'a> {
    inner: &'a Mutex<Inner>,
    seq: u64,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut inner = self.inner.lock();
        if inner.latest_seq == self.seq && inner.phase == ConversionPhase::Pending {
            debug!("conversion #{} dropped before the client answered", self.seq);
            inner.phase = ConversionPhase::Idle;
        }
    }
}
