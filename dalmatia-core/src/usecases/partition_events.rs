use super::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct PartitionedEvents<E = Event> {
    pub past: Vec<E>,
    pub current: Vec<E>,
    pub future: Vec<E>,
}

impl<E> Default for PartitionedEvents<E> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            current: Vec::new(),
            future: Vec::new(),
        }
    }
}

impl<E> PartitionedEvents<E> {
    pub fn len(&self) -> usize {
        self.past.len() + self.current.len() + self.future.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transforms the events of all partitions, keeping their order.
    ///
    /// Stops at the first error.
    pub fn try_map<T, Err>(
        self,
        mut f: impl FnMut(E) -> std::result::Result<T, Err>,
    ) -> std::result::Result<PartitionedEvents<T>, Err> {
        let Self {
            past,
            current,
            future,
        } = self;
        Ok(PartitionedEvents {
            past: past.into_iter().map(&mut f).collect::<std::result::Result<_, _>>()?,
            current: current.into_iter().map(&mut f).collect::<std::result::Result<_, _>>()?,
            future: future.into_iter().map(&mut f).collect::<std::result::Result<_, _>>()?,
        })
    }
}

/// Splits events into past, current and future events.
///
/// An event is past if it ended before `now` and future if it starts
/// after `now`. Everything else is current. The relative order of the
/// events is preserved.
pub fn partition_events<I>(events: I, now: Timestamp) -> PartitionedEvents
where
    I: IntoIterator<Item = Event>,
{
    let mut partitioned = PartitionedEvents::default();
    for event in events {
        if event.end < now {
            partitioned.past.push(event);
        } else if event.start > now {
            partitioned.future.push(event);
        } else {
            partitioned.current.push(event);
        }
    }
    partitioned
}

/// All events created by the user, partitioned relative to `now`.
pub fn my_events<R>(repo: &R, user_id: &Id, now: Timestamp) -> Result<PartitionedEvents>
where
    R: EventRepo,
{
    let events = repo.filter_events_chronologically(&EventFilter {
        created_by: Some(user_id.clone()),
        ..Default::default()
    })?;
    Ok(partition_events(events, now))
}
