/// The keys of one channel (position, rotation or scale) of a bone track.
///
/// There is one slot per frame. An empty slot means the track has no data
/// for that frame on this channel; it is *not* the same as a default value
/// and is carried through mirroring as-is. Slots past the end of the vector
/// are empty too, so a channel with a single key is a constant.
#[derive(Clone, Debug, PartialEq)]
pub struct Channel<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for Channel<T> {
    fn default() -> Channel<T> {
        Channel { slots: vec![] }
    }
}

impl<T: Copy> Channel<T> {
    /// A channel with a key in every slot.
    pub fn from_keys(keys: Vec<T>) -> Channel<T> {
        Channel { slots: keys.into_iter().map(Some).collect() }
    }

    pub fn from_slots(slots: Vec<Option<T>>) -> Channel<T> {
        Channel { slots }
    }

    pub fn get(&self, frame: usize) -> Option<T> {
        self.slots.get(frame).and_then(|&slot| slot)
    }

    pub fn push(&mut self, slot: Option<T>) {
        self.slots.push(slot);
    }

    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Number of slots, including empty ones (but not the implicit empty
    /// slots past the end).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots that actually hold a key.
    pub fn num_keys(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.num_keys() == 0
    }

    /// Iterates over the keys that are present, in frame order.
    pub fn keys<'a>(&'a self) -> impl Iterator<Item = T> + 'a {
        self.slots.iter().filter_map(|&slot| slot)
    }

    /// Drops trailing empty slots.
    pub fn trim(&mut self) {
        while let Some(&None) = self.slots.last() {
            self.slots.pop();
        }
    }
}

#[test]
fn test_sparse_slots() {
    let mut ch = Channel::from_slots(vec![Some(1), None, Some(3)]);
    assert_eq!(ch.get(0), Some(1));
    assert_eq!(ch.get(1), None);
    assert_eq!(ch.get(2), Some(3));
    assert_eq!(ch.get(7), None);
    assert_eq!(ch.num_keys(), 2);
    assert_eq!(ch.keys().collect::<Vec<_>>(), vec![1, 3]);

    ch.push(None);
    ch.push(None);
    assert_eq!(ch.len(), 5);
    ch.trim();
    assert_eq!(ch.len(), 3);
}

#[test]
fn test_empty_channel() {
    let mut ch: Channel<f32> = Channel::from_slots(vec![None, None]);
    assert!(ch.is_empty());
    ch.trim();
    assert_eq!(ch.len(), 0);
}
