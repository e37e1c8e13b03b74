//! FIFO frame classification and per-sensor extraction.
//!
//! The FIFO is a stream of frames with no length prefix. Each frame starts
//! with a header byte that fixes its kind, and the kind plus the current
//! [`FifoLayout`] fix its width. One misclassified header shifts every
//! following offset, so any header that is unknown, or names a sensor the
//! layout does not enable, stops the scan instead of guessing a width.
//!
//! | Header | Frame              | Width (bytes)                 |
//! |--------|--------------------|-------------------------------|
//! | `0x84` | accelerometer      | 1 + 6, +2 with sensor time    |
//! | `0x88` | gyroscope          | 1 + 6, +2 with sensor time    |
//! | `0x90` | temperature        | 1 + 2, +2 with sensor time    |
//! | `0x40` | skip marker        | 1 + 1 (dropped frame count)   |
//! | `0x48` | config-change      | 1 + 1                         |
//! | `0x80` | FIFO empty         | 1, ends the scan              |

use super::fifo::FifoLayout;
use super::{AccelRaw, GyroRaw, Sample, TemperatureRaw, Timestamp, take6};
use crate::register::fifo_header;

const AXES_BYTES: usize = 6;
const TEMPERATURE_BYTES: usize = 2;
const TIME_BYTES: usize = 2;
const MARKER_PAYLOAD_BYTES: usize = 1;

/// Frame kinds distinguished by the header byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoFrameKind {
    /// Accelerometer data frame.
    Accel,
    /// Gyroscope data frame.
    Gyro,
    /// Temperature data frame.
    Temperature,
    /// Frames were dropped (sensor disabled or FIFO overrun).
    Skip,
    /// Sensor configuration changed between frames.
    ConfigChange,
    /// No more data.
    Empty,
}

impl FifoFrameKind {
    /// Classifies a header byte.
    pub const fn from_header(header: u8) -> Option<Self> {
        match header {
            fifo_header::ACCEL => Some(Self::Accel),
            fifo_header::GYRO => Some(Self::Gyro),
            fifo_header::TEMPERATURE => Some(Self::Temperature),
            fifo_header::SKIP => Some(Self::Skip),
            fifo_header::CONFIG_CHANGE => Some(Self::ConfigChange),
            fifo_header::EMPTY => Some(Self::Empty),
            _ => None,
        }
    }

    /// Returns the header byte for this kind.
    pub const fn header(self) -> u8 {
        match self {
            Self::Accel => fifo_header::ACCEL,
            Self::Gyro => fifo_header::GYRO,
            Self::Temperature => fifo_header::TEMPERATURE,
            Self::Skip => fifo_header::SKIP,
            Self::ConfigChange => fifo_header::CONFIG_CHANGE,
            Self::Empty => fifo_header::EMPTY,
        }
    }

    /// Returns whether `layout` allows this kind to appear.
    pub const fn allowed_by(self, layout: FifoLayout) -> bool {
        match self {
            Self::Accel => layout.accel,
            Self::Gyro => layout.gyro,
            Self::Temperature => layout.temperature,
            Self::Skip | Self::ConfigChange | Self::Empty => true,
        }
    }

    /// Returns the full frame width, header included.
    pub const fn width(self, layout: FifoLayout) -> usize {
        let (payload, timed) = match self {
            Self::Accel => (AXES_BYTES, layout.time_accel),
            Self::Gyro => (AXES_BYTES, layout.time_gyro),
            Self::Temperature => (TEMPERATURE_BYTES, layout.time_temperature),
            Self::Skip | Self::ConfigChange => (MARKER_PAYLOAD_BYTES, false),
            Self::Empty => (0, false),
        };
        1 + payload + if timed { TIME_BYTES } else { 0 }
    }
}

/// One decoded FIFO frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoFrame {
    /// Accelerometer sample.
    Accel(Sample<AccelRaw>),
    /// Gyroscope sample.
    Gyro(Sample<GyroRaw>),
    /// Temperature sample (may carry the "no temperature" sentinel).
    Temperature(Sample<TemperatureRaw>),
    /// Frames were dropped.
    Skip {
        /// Number of dropped frames.
        dropped: u8,
    },
    /// Sensor configuration changed.
    ConfigChange {
        /// Raw change flags.
        flags: u8,
    },
    /// No more data.
    Empty,
}

impl FifoFrame {
    /// Returns the frame kind.
    pub const fn kind(&self) -> FifoFrameKind {
        match self {
            Self::Accel(_) => FifoFrameKind::Accel,
            Self::Gyro(_) => FifoFrameKind::Gyro,
            Self::Temperature(_) => FifoFrameKind::Temperature,
            Self::Skip { .. } => FifoFrameKind::Skip,
            Self::ConfigChange { .. } => FifoFrameKind::ConfigChange,
            Self::Empty => FifoFrameKind::Empty,
        }
    }
}

/// Outcome of decoding the frame at the start of a byte slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameDecode {
    /// A complete frame and its width in bytes.
    Frame(FifoFrame, usize),
    /// The header is known but fewer bytes remain than the frame needs.
    Truncated(FifoFrameKind),
    /// The header is unknown or names a sensor the layout does not enable.
    Anomaly(u8),
    /// No bytes remain.
    Exhausted,
}

fn timestamp_at(payload: &[u8], offset: usize, timed: bool) -> Option<Timestamp> {
    timed.then(|| Timestamp::from_fifo_bytes([payload[offset], payload[offset + 1]]))
}

/// Decodes the frame that starts at `bytes[0]`.
pub fn decode_frame(bytes: &[u8], layout: FifoLayout) -> FrameDecode {
    let Some(&header) = bytes.first() else {
        return FrameDecode::Exhausted;
    };
    let Some(kind) = FifoFrameKind::from_header(header) else {
        return FrameDecode::Anomaly(header);
    };
    if !kind.allowed_by(layout) {
        return FrameDecode::Anomaly(header);
    }
    let width = kind.width(layout);
    if bytes.len() < width {
        return FrameDecode::Truncated(kind);
    }

    let payload = &bytes[1..width];
    let frame = match kind {
        FifoFrameKind::Accel => FifoFrame::Accel(Sample {
            timestamp: timestamp_at(payload, AXES_BYTES, layout.time_accel),
            data: AccelRaw::from_bytes(take6(payload, 0)),
        }),
        FifoFrameKind::Gyro => FifoFrame::Gyro(Sample {
            timestamp: timestamp_at(payload, AXES_BYTES, layout.time_gyro),
            data: GyroRaw::from_bytes(take6(payload, 0)),
        }),
        FifoFrameKind::Temperature => FifoFrame::Temperature(Sample {
            timestamp: timestamp_at(payload, TEMPERATURE_BYTES, layout.time_temperature),
            data: TemperatureRaw::from_bytes([payload[0], payload[1]]),
        }),
        FifoFrameKind::Skip => FifoFrame::Skip {
            dropped: payload[0],
        },
        FifoFrameKind::ConfigChange => FifoFrame::ConfigChange { flags: payload[0] },
        FifoFrameKind::Empty => FifoFrame::Empty,
    };
    FrameDecode::Frame(frame, width)
}

/// Iterator over FIFO frames in arrival order.
///
/// Stops at the end of data, at a truncated trailing frame, after the FIFO
/// empty marker, or at an anomalous header. The stop reason is available
/// through [`anomaly`](Self::anomaly) and [`is_truncated`](Self::is_truncated).
pub struct FifoFrameIterator<'a> {
    data: &'a [u8],
    layout: FifoLayout,
    offset: usize,
    halted: bool,
    truncated: bool,
    anomaly: Option<u8>,
}

impl<'a> FifoFrameIterator<'a> {
    /// Creates an iterator over FIFO frames.
    pub const fn new(data: &'a [u8], layout: FifoLayout) -> Self {
        Self::starting_at(data, layout, 0)
    }

    pub(crate) const fn starting_at(data: &'a [u8], layout: FifoLayout, offset: usize) -> Self {
        Self {
            data,
            layout,
            offset,
            halted: false,
            truncated: false,
            anomaly: None,
        }
    }

    /// Returns the byte offset of the next frame.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the remaining unparsed bytes.
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Returns the offending header byte if the scan stopped on an anomaly.
    pub const fn anomaly(&self) -> Option<u8> {
        self.anomaly
    }

    /// Returns true if the scan stopped on an incomplete trailing frame.
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Returns true if the scan can make no further progress on this data.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }
}

impl Iterator for FifoFrameIterator<'_> {
    type Item = FifoFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted || self.truncated || self.offset >= self.data.len() {
            return None;
        }
        match decode_frame(&self.data[self.offset..], self.layout) {
            FrameDecode::Frame(frame, width) => {
                self.offset += width;
                if matches!(frame, FifoFrame::Empty) {
                    self.halted = true;
                }
                Some(frame)
            }
            FrameDecode::Truncated(_) => {
                self.truncated = true;
                None
            }
            FrameDecode::Anomaly(header) => {
                self.anomaly = Some(header);
                self.halted = true;
                None
            }
            FrameDecode::Exhausted => None,
        }
    }
}

/// Caller-owned scan position for resumable extraction.
///
/// Each sensor gets its own cursor, so extraction order never changes the
/// result. A cursor that stopped on the empty marker or an anomaly stays
/// stopped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoCursor {
    offset: usize,
    halted: bool,
}

impl FifoCursor {
    /// Creates a cursor at the start of the buffer.
    pub const fn new() -> Self {
        Self {
            offset: 0,
            halted: false,
        }
    }

    /// Returns the byte offset of the next frame to examine.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns true if the scan ended on the empty marker or an anomaly.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Moves the cursor back to the start of the buffer.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Sample types that can be pulled out of a FIFO frame.
pub trait FifoSample: Copy + sealed::Sealed {
    /// Returns the sample if `frame` belongs to this sensor.
    fn from_frame(frame: &FifoFrame) -> Option<Sample<Self>>;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::AccelRaw {}
    impl Sealed for super::GyroRaw {}
    impl Sealed for super::TemperatureRaw {}
}

impl FifoSample for AccelRaw {
    fn from_frame(frame: &FifoFrame) -> Option<Sample<Self>> {
        match frame {
            FifoFrame::Accel(sample) => Some(*sample),
            _ => None,
        }
    }
}

impl FifoSample for GyroRaw {
    fn from_frame(frame: &FifoFrame) -> Option<Sample<Self>> {
        match frame {
            FifoFrame::Gyro(sample) => Some(*sample),
            _ => None,
        }
    }
}

impl FifoSample for TemperatureRaw {
    fn from_frame(frame: &FifoFrame) -> Option<Sample<Self>> {
        match frame {
            FifoFrame::Temperature(sample) => Some(*sample),
            _ => None,
        }
    }
}

/// Samples decoded by one extraction call plus scan diagnostics.
#[derive(Debug, PartialEq, Eq)]
pub struct Extraction<'a, T> {
    /// Decoded samples, oldest first.
    pub samples: &'a [Sample<T>],
    /// Frames classified during this call, of any kind.
    pub frames_examined: usize,
    /// Anomalous headers hit during this call (0 or 1; the scan halts on the first).
    pub anomalies: usize,
    /// Bytes from the stop position to the end of the buffer.
    pub unparsed_bytes: usize,
}

impl<T> Extraction<'_, T> {
    /// Returns the number of decoded samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true when no samples were decoded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Scans from `cursor` and copies this sensor's samples into `out`.
///
/// Stops when `out` is full, the data runs out, the empty marker is hit, or
/// an anomalous header is found. Frames of other kinds are stepped over.
pub(crate) fn extract<'a, T: FifoSample>(
    data: &[u8],
    layout: FifoLayout,
    cursor: &mut FifoCursor,
    out: &'a mut [Sample<T>],
) -> Extraction<'a, T> {
    let mut frames = FifoFrameIterator::starting_at(data, layout, cursor.offset);
    frames.halted = cursor.halted;

    let mut count = 0;
    let mut frames_examined = 0;
    while count < out.len() {
        let Some(frame) = frames.next() else {
            break;
        };
        frames_examined += 1;
        if let Some(sample) = T::from_frame(&frame) {
            out[count] = sample;
            count += 1;
        }
    }

    cursor.offset = frames.offset();
    cursor.halted = frames.is_halted();

    Extraction {
        samples: &out[..count],
        frames_examined,
        anomalies: usize::from(frames.anomaly().is_some()),
        unparsed_bytes: frames.remaining(),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;
    use crate::data::FifoBuffer;

    fn accel_frame(out: &mut Vec<u8>, x: i16, y: i16, z: i16, time: Option<u16>) {
        out.push(fifo_header::ACCEL);
        axes(out, x, y, z);
        if let Some(time) = time {
            out.extend_from_slice(&time.to_le_bytes());
        }
    }

    fn gyro_frame(out: &mut Vec<u8>, x: i16, y: i16, z: i16, time: Option<u16>) {
        out.push(fifo_header::GYRO);
        axes(out, x, y, z);
        if let Some(time) = time {
            out.extend_from_slice(&time.to_le_bytes());
        }
    }

    fn temperature_frame(out: &mut Vec<u8>, value: i16) {
        out.push(fifo_header::TEMPERATURE);
        out.extend_from_slice(&value.to_le_bytes());
    }

    fn axes(out: &mut Vec<u8>, x: i16, y: i16, z: i16) {
        out.extend_from_slice(&x.to_le_bytes());
        out.extend_from_slice(&y.to_le_bytes());
        out.extend_from_slice(&z.to_le_bytes());
    }

    fn buffer(bytes: &[u8]) -> FifoBuffer<256> {
        FifoBuffer::from_bytes(bytes).expect("fits")
    }

    const ACCEL_GYRO: FifoLayout = FifoLayout::new(true, true, false);

    #[test]
    fn frame_widths_follow_layout() {
        let plain = FifoLayout::new(true, true, true);
        assert_eq!(FifoFrameKind::Accel.width(plain), 7);
        assert_eq!(FifoFrameKind::Temperature.width(plain), 3);
        let timed = plain.with_accel_time(true).with_temperature_time(true);
        assert_eq!(FifoFrameKind::Accel.width(timed), 9);
        assert_eq!(FifoFrameKind::Gyro.width(timed), 7);
        assert_eq!(FifoFrameKind::Temperature.width(timed), 5);
        assert_eq!(FifoFrameKind::Skip.width(timed), 2);
        assert_eq!(FifoFrameKind::Empty.width(timed), 1);
    }

    #[test]
    fn accel_only_buffer_yields_every_frame_in_order() {
        let mut bytes = Vec::new();
        for i in 0..10i16 {
            accel_frame(&mut bytes, i, -i, i * 100, None);
        }
        let fifo = buffer(&bytes);
        let layout = FifoLayout::new(true, false, false);

        let mut out = [Sample::default(); 16];
        let result = fifo.extract_accel(layout, &mut out);

        assert_eq!(result.len(), 10);
        for (i, sample) in result.samples.iter().enumerate() {
            let i = i as i16;
            assert_eq!(sample.data, AccelRaw { x: i, y: -i, z: i * 100 });
            assert_eq!(sample.timestamp, None);
        }
        assert_eq!(result.frames_examined, 10);
        assert_eq!(result.anomalies, 0);
        assert_eq!(result.unparsed_bytes, 0);
    }

    #[test]
    fn interleaved_frames_split_by_sensor() {
        // a g g a a g a g g g a
        let pattern = b"aggaagaggga";
        let mut bytes = Vec::new();
        for (i, kind) in pattern.iter().enumerate() {
            let v = i as i16;
            if *kind == b'a' {
                accel_frame(&mut bytes, v, 0, 0, None);
            } else {
                gyro_frame(&mut bytes, 0, v, 0, None);
            }
        }
        let fifo = buffer(&bytes);

        let mut accel = [Sample::default(); 16];
        let mut gyro = [Sample::default(); 16];
        let accel = fifo.extract_accel(ACCEL_GYRO, &mut accel);
        let gyro = fifo.extract_gyro(ACCEL_GYRO, &mut gyro);

        assert_eq!(accel.len(), 5);
        assert_eq!(gyro.len(), 6);
        let accel_x: Vec<i16> = accel.samples.iter().map(|s| s.data.x).collect();
        let gyro_y: Vec<i16> = gyro.samples.iter().map(|s| s.data.y).collect();
        assert_eq!(accel_x, [0, 3, 4, 6, 10]);
        assert_eq!(gyro_y, [1, 2, 5, 7, 8, 9]);
        assert_eq!(accel.frames_examined, 11);
        assert_eq!(gyro.frames_examined, 11);
    }

    #[test]
    fn every_interleaving_up_to_eight_frames_splits_exactly() {
        for len in 0..=8u32 {
            for mask in 0u32..(1 << len) {
                // Bit set: gyro frame at that position.
                let mut bytes = Vec::new();
                let mut expected_accel = Vec::new();
                let mut expected_gyro = Vec::new();
                for position in 0..len {
                    let value = position as i16 + 1;
                    if mask & (1 << position) != 0 {
                        gyro_frame(&mut bytes, 0, value, 0, None);
                        expected_gyro.push(value);
                    } else {
                        accel_frame(&mut bytes, value, 0, 0, None);
                        expected_accel.push(value);
                    }
                }
                let fifo = buffer(&bytes);

                let mut accel = [Sample::default(); 8];
                let mut gyro = [Sample::default(); 8];
                let accel = fifo.extract_accel(ACCEL_GYRO, &mut accel);
                let gyro = fifo.extract_gyro(ACCEL_GYRO, &mut gyro);

                let accel_x: Vec<i16> = accel.samples.iter().map(|s| s.data.x).collect();
                let gyro_y: Vec<i16> = gyro.samples.iter().map(|s| s.data.y).collect();
                assert_eq!(accel_x, expected_accel, "len {len} mask {mask:#b}");
                assert_eq!(gyro_y, expected_gyro, "len {len} mask {mask:#b}");
                assert_eq!(accel.anomalies + gyro.anomalies, 0);
            }
        }
    }

    #[test]
    fn extraction_order_does_not_change_results() {
        let mut bytes = Vec::new();
        gyro_frame(&mut bytes, 1, 1, 1, None);
        accel_frame(&mut bytes, 2, 2, 2, None);
        gyro_frame(&mut bytes, 3, 3, 3, None);
        let fifo = buffer(&bytes);

        let mut first = [Sample::default(); 4];
        let mut second = [Sample::default(); 4];
        let gyro_first = fifo.extract_gyro(ACCEL_GYRO, &mut first).len();
        let accel_after = fifo.extract_accel(ACCEL_GYRO, &mut second).len();
        let mut third = [Sample::default(); 4];
        let accel_again = fifo.extract_accel(ACCEL_GYRO, &mut third).len();

        assert_eq!(gyro_first, 2);
        assert_eq!(accel_after, 1);
        assert_eq!(accel_again, 1);
    }

    #[test]
    fn truncated_trailing_frame_is_not_decoded() {
        let mut bytes = Vec::new();
        accel_frame(&mut bytes, 1, 2, 3, None);
        accel_frame(&mut bytes, 4, 5, 6, None);
        accel_frame(&mut bytes, 7, 8, 9, None);
        bytes.truncate(bytes.len() - 3);
        let fifo = buffer(&bytes);
        let layout = FifoLayout::new(true, false, false);

        let mut out = [Sample::default(); 8];
        let result = fifo.extract_accel(layout, &mut out);

        assert_eq!(result.len(), 2);
        assert_eq!(result.samples[1].data, AccelRaw { x: 4, y: 5, z: 6 });
        assert_eq!(result.anomalies, 0);
        assert_eq!(result.unparsed_bytes, 4);

        let mut frames = fifo.frames(layout);
        assert_eq!(frames.by_ref().count(), 2);
        assert!(frames.is_truncated());
    }

    #[test]
    fn empty_marker_first_stops_scan() {
        let fifo = buffer(&[fifo_header::EMPTY, fifo_header::ACCEL, 1, 0, 2, 0, 3, 0]);
        let layout = FifoLayout::new(true, false, false);

        let mut out = [Sample::default(); 4];
        let result = fifo.extract_accel(layout, &mut out);

        assert!(result.is_empty());
        assert_eq!(result.anomalies, 0);
        assert_eq!(result.frames_examined, 1);
        assert_eq!(result.unparsed_bytes, 7);
    }

    #[test]
    fn unknown_header_halts_once() {
        let mut bytes = Vec::new();
        accel_frame(&mut bytes, 1, 1, 1, None);
        bytes.push(0x7E);
        accel_frame(&mut bytes, 2, 2, 2, None);
        let fifo = buffer(&bytes);
        let layout = FifoLayout::new(true, false, false);

        let mut cursor = FifoCursor::new();
        let mut out = [Sample::default(); 4];
        let result = fifo.extract_accel_from(layout, &mut cursor, &mut out);

        assert_eq!(result.len(), 1);
        assert_eq!(result.anomalies, 1);
        assert_eq!(result.frames_examined, 1);
        assert_eq!(result.unparsed_bytes, 8);
        assert_eq!(cursor.offset(), 7);
        assert!(cursor.is_halted());

        let mut more = [Sample::default(); 4];
        let again = fifo.extract_accel_from(layout, &mut cursor, &mut more);
        assert!(again.is_empty());
        assert_eq!(again.anomalies, 0);
    }

    #[test]
    fn header_for_disabled_sensor_is_anomaly() {
        let mut bytes = Vec::new();
        accel_frame(&mut bytes, 1, 1, 1, None);
        gyro_frame(&mut bytes, 2, 2, 2, None);
        let fifo = buffer(&bytes);
        let layout = FifoLayout::new(true, false, false);

        let mut out = [Sample::default(); 4];
        let result = fifo.extract_accel(layout, &mut out);
        assert_eq!(result.len(), 1);
        assert_eq!(result.anomalies, 1);

        let mut frames = fifo.frames(layout);
        assert!(frames.by_ref().last().is_some());
        assert_eq!(frames.anomaly(), Some(fifo_header::GYRO));
    }

    #[test]
    fn sign_extension_at_word_boundary() {
        let fifo = buffer(&[fifo_header::ACCEL, 0x00, 0xFF, 0xFF, 0x7F, 0x00, 0x80]);
        let layout = FifoLayout::new(true, false, false);

        let mut out = [Sample::default(); 1];
        let result = fifo.extract_accel(layout, &mut out);

        assert_eq!(result.samples[0].data, AccelRaw { x: -256, y: 32_767, z: -32_768 });
    }

    #[test]
    fn markers_are_stepped_over() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&[fifo_header::SKIP, 3]);
        accel_frame(&mut bytes, 5, 5, 5, None);
        bytes.extend_from_slice(&[fifo_header::CONFIG_CHANGE, 0x01]);
        temperature_frame(&mut bytes, 1024);
        accel_frame(&mut bytes, 6, 6, 6, None);
        let fifo = buffer(&bytes);
        let layout = FifoLayout::new(true, false, true);

        let mut out = [Sample::default(); 4];
        let result = fifo.extract_accel(layout, &mut out);
        assert_eq!(result.len(), 2);
        assert_eq!(result.frames_examined, 5);

        let kinds: Vec<FifoFrameKind> = fifo.frames(layout).map(|f| f.kind()).collect();
        assert_eq!(
            kinds,
            [
                FifoFrameKind::Skip,
                FifoFrameKind::Accel,
                FifoFrameKind::ConfigChange,
                FifoFrameKind::Temperature,
                FifoFrameKind::Accel,
            ]
        );
        assert_eq!(fifo.frames(layout).next(), Some(FifoFrame::Skip { dropped: 3 }));
    }

    #[test]
    fn temperature_sentinel_is_emitted() {
        let mut bytes = Vec::new();
        temperature_frame(&mut bytes, 512);
        temperature_frame(&mut bytes, TemperatureRaw::INVALID);
        let fifo = buffer(&bytes);
        let layout = FifoLayout::new(false, false, true);

        let mut out = [Sample::default(); 4];
        let result = fifo.extract_temperature(layout, &mut out);

        assert_eq!(result.len(), 2);
        assert_eq!(result.samples[0].data.value, 512);
        assert!(result.samples[1].data.is_invalid());
    }

    #[test]
    fn full_output_stops_and_cursor_resumes() {
        let mut bytes = Vec::new();
        for i in 0..5i16 {
            accel_frame(&mut bytes, i, 0, 0, None);
            gyro_frame(&mut bytes, 0, i, 0, None);
        }
        let fifo = buffer(&bytes);

        let mut cursor = FifoCursor::new();
        let mut out = [Sample::default(); 2];
        let first = fifo.extract_accel_from(ACCEL_GYRO, &mut cursor, &mut out);
        let first_x: Vec<i16> = first.samples.iter().map(|s| s.data.x).collect();
        assert_eq!(first_x, [0, 1]);
        assert_eq!(first.frames_examined, 3);
        assert_eq!(cursor.offset(), 21);

        let mut out = [Sample::default(); 8];
        let rest = fifo.extract_accel_from(ACCEL_GYRO, &mut cursor, &mut out);
        let rest_x: Vec<i16> = rest.samples.iter().map(|s| s.data.x).collect();
        assert_eq!(rest_x, [2, 3, 4]);
        assert_eq!(cursor.offset(), bytes.len());
        assert!(!cursor.is_halted());
    }

    #[test]
    fn separate_cursors_do_not_interfere() {
        let mut bytes = Vec::new();
        accel_frame(&mut bytes, 1, 0, 0, None);
        gyro_frame(&mut bytes, 0, 1, 0, None);
        accel_frame(&mut bytes, 2, 0, 0, None);
        let fifo = buffer(&bytes);

        let mut accel_cursor = FifoCursor::new();
        let mut gyro_cursor = FifoCursor::new();
        let mut accel = [Sample::default(); 4];
        let mut gyro = [Sample::default(); 4];
        let a = fifo.extract_accel_from(ACCEL_GYRO, &mut accel_cursor, &mut accel);
        let g = fifo.extract_gyro_from(ACCEL_GYRO, &mut gyro_cursor, &mut gyro);
        assert_eq!(a.len(), 2);
        assert_eq!(g.len(), 1);

        let mut shared = FifoCursor::new();
        let mut accel = [Sample::default(); 4];
        let mut gyro = [Sample::default(); 4];
        let a = fifo.extract_accel_from(ACCEL_GYRO, &mut shared, &mut accel);
        let g = fifo.extract_gyro_from(ACCEL_GYRO, &mut shared, &mut gyro);
        assert_eq!(a.len(), 2);
        assert_eq!(g.len(), 0);

        shared.reset();
        let mut gyro = [Sample::default(); 4];
        assert_eq!(fifo.extract_gyro_from(ACCEL_GYRO, &mut shared, &mut gyro).len(), 1);
    }

    #[test]
    fn timestamped_accel_then_gyro_then_empty() {
        let mut bytes = Vec::new();
        accel_frame(&mut bytes, 100, -200, 300, Some(0x1234));
        gyro_frame(&mut bytes, 1, 2, 3, None);
        bytes.push(fifo_header::EMPTY);
        let fifo = buffer(&bytes);
        let layout = ACCEL_GYRO.with_accel_time(true);

        let mut accel = [Sample::default(); 4];
        let mut gyro = [Sample::default(); 4];
        let accel = fifo.extract_accel(layout, &mut accel);
        let gyro = fifo.extract_gyro(layout, &mut gyro);

        assert_eq!(accel.len(), 1);
        assert_eq!(accel.samples[0].data, AccelRaw { x: 100, y: -200, z: 300 });
        let time = accel.samples[0].timestamp.expect("sensor time");
        assert_ne!(time.ticks, 0);
        assert_eq!(gyro.len(), 1);
        assert_eq!(gyro.samples[0].data, GyroRaw { x: 1, y: 2, z: 3 });
        assert_eq!(gyro.samples[0].timestamp, None);
        assert_eq!(accel.anomalies + gyro.anomalies, 0);
    }

    #[test]
    fn empty_buffer_and_empty_output() {
        let fifo = buffer(&[]);
        let mut out = [Sample::default(); 4];
        let result = fifo.extract_gyro(ACCEL_GYRO, &mut out);
        assert!(result.is_empty());
        assert_eq!(result.frames_examined, 0);

        let mut bytes = Vec::new();
        accel_frame(&mut bytes, 1, 1, 1, None);
        let fifo = buffer(&bytes);
        let mut none: [Sample<AccelRaw>; 0] = [];
        let result = fifo.extract_accel(ACCEL_GYRO, &mut none);
        assert_eq!(result.frames_examined, 0);
        assert_eq!(result.unparsed_bytes, 7);
    }

    #[test]
    fn decode_frame_reports_each_outcome() {
        let layout = FifoLayout::new(false, true, false);
        assert_eq!(decode_frame(&[], layout), FrameDecode::Exhausted);
        assert_eq!(decode_frame(&[0x01], layout), FrameDecode::Anomaly(0x01));
        assert_eq!(
            decode_frame(&[fifo_header::GYRO, 0, 0], layout),
            FrameDecode::Truncated(FifoFrameKind::Gyro)
        );
        assert_eq!(
            decode_frame(&[fifo_header::EMPTY], layout),
            FrameDecode::Frame(FifoFrame::Empty, 1)
        );
    }
}
