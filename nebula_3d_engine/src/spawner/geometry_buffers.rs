//! Spawner-owned per-vertex buffer channels.
//!
//! A `GeometryBuffers` owns the raw vertex data every view produced by
//! one spawner shares: positions, colors, normals, and 2D texture
//! coordinates. Channels are keyed by generational `BufferKey`s; a
//! channel keeps its key across in-place overwrites, so descriptions
//! registered against the key stay valid when the data is replaced
//! (e.g. recoloring).

use slotmap::{SlotMap, new_key_type};
use crate::error::Result;
use crate::engine_bail;

new_key_type! {
    /// Stable identity of one buffer channel within a spawner.
    ///
    /// Replaces the buffer memory address as the table key: the key is
    /// never dereferenced and survives data replacement.
    pub struct BufferKey;
}

// ===== BUFFER CHANNEL =====

/// The four per-vertex channels a spawner can own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferChannel {
    /// Vertex positions, 3 floats per vertex
    Position,
    /// Vertex colors, 4 floats per vertex (RGBA)
    Color,
    /// Vertex normals, 3 floats per vertex
    Normal,
    /// 2D texture coordinates, 2 floats per vertex
    TexCoord,
}

impl BufferChannel {
    /// Number of float components per vertex for this channel
    pub fn components(&self) -> u32 {
        match self {
            BufferChannel::Position => 3,
            BufferChannel::Color => 4,
            BufferChannel::Normal => 3,
            BufferChannel::TexCoord => 2,
        }
    }
}

/// One owned channel: its kind and its raw float data
struct ChannelBuffer {
    channel: BufferChannel,
    data: Vec<f32>,
}

// ===== GEOMETRY BUFFERS =====

/// The spawner's owned raw buffers.
///
/// Data is overwritten, not appended, when a channel is re-created;
/// every view referencing the channel observes the new data.
pub struct GeometryBuffers {
    buffers: SlotMap<BufferKey, ChannelBuffer>,
    position: Option<BufferKey>,
    color: Option<BufferKey>,
    normal: Option<BufferKey>,
    tex_coord: Option<BufferKey>,
}

impl GeometryBuffers {
    /// Create an empty buffer store
    pub fn new() -> Self {
        Self {
            buffers: SlotMap::with_key(),
            position: None,
            color: None,
            normal: None,
            tex_coord: None,
        }
    }

    /// Store (or overwrite in place) a channel's data, returning its key.
    ///
    /// The key is issued on first write and reused on every overwrite.
    /// Non-position channels must match the current vertex count.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` if `data` is not a whole number of vertices
    /// - `PreconditionNotMet` if a non-position channel is written before
    ///   positions, or with a mismatched vertex count
    pub fn set_channel(&mut self, channel: BufferChannel, data: Vec<f32>) -> Result<BufferKey> {
        let components = channel.components() as usize;
        if data.len() % components != 0 {
            engine_bail!(InvalidConfiguration, "nebula3d::GeometryBuffers",
                "channel {:?} data length {} is not a multiple of {} components",
                channel, data.len(), components);
        }

        if channel != BufferChannel::Position {
            let vertex_count = self.vertex_count() as usize;
            if vertex_count == 0 {
                engine_bail!(PreconditionNotMet, "nebula3d::GeometryBuffers",
                    "channel {:?} written before vertex positions", channel);
            }
            if data.len() / components != vertex_count {
                engine_bail!(PreconditionNotMet, "nebula3d::GeometryBuffers",
                    "channel {:?} holds {} vertices, expected {}",
                    channel, data.len() / components, vertex_count);
            }
        }

        let slot = self.channel_key_slot(channel);
        if let Some(key) = slot {
            // Overwrite in place, key stays stable
            self.buffers[key].data = data;
            Ok(key)
        } else {
            let key = self.buffers.insert(ChannelBuffer { channel, data });
            *self.channel_key_slot_mut(channel) = Some(key);
            Ok(key)
        }
    }

    /// Key of a channel, if its data has been created
    pub fn key(&self, channel: BufferChannel) -> Option<BufferKey> {
        self.channel_key_slot(channel)
    }

    /// Channel kind of a key, if the key is live
    pub fn channel_of(&self, key: BufferKey) -> Option<BufferChannel> {
        self.buffers.get(key).map(|b| b.channel)
    }

    /// Raw float data of a live key
    pub fn data(&self, key: BufferKey) -> Option<&[f32]> {
        self.buffers.get(key).map(|b| b.data.as_slice())
    }

    /// Raw byte view of a live key (upload form)
    pub fn bytes(&self, key: BufferKey) -> Option<&[u8]> {
        self.buffers.get(key).map(|b| bytemuck::cast_slice(b.data.as_slice()))
    }

    /// Whether a key refers to a live channel
    pub fn contains(&self, key: BufferKey) -> bool {
        self.buffers.contains_key(key)
    }

    /// Number of vertices, derived from the position channel (0 if absent)
    pub fn vertex_count(&self) -> u32 {
        self.position
            .and_then(|key| self.buffers.get(key))
            .map(|b| (b.data.len() / 3) as u32)
            .unwrap_or(0)
    }

    fn channel_key_slot(&self, channel: BufferChannel) -> Option<BufferKey> {
        match channel {
            BufferChannel::Position => self.position,
            BufferChannel::Color => self.color,
            BufferChannel::Normal => self.normal,
            BufferChannel::TexCoord => self.tex_coord,
        }
    }

    fn channel_key_slot_mut(&mut self, channel: BufferChannel) -> &mut Option<BufferKey> {
        match channel {
            BufferChannel::Position => &mut self.position,
            BufferChannel::Color => &mut self.color,
            BufferChannel::Normal => &mut self.normal,
            BufferChannel::TexCoord => &mut self.tex_coord,
        }
    }
}

impl Default for GeometryBuffers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "geometry_buffers_tests.rs"]
mod tests;
