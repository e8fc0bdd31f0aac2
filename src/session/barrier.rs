/// Two independently arriving values; usable once both are present.
///
/// Supplying a slot again replaces its value, so a re-delivered payload
/// simply rebuilds from the latest pair.
#[derive(Clone, Debug)]
pub struct JoinBarrier<A, B> {
    first: Option<A>,
    second: Option<B>,
}

impl<A, B> Default for JoinBarrier<A, B> {
    fn default() -> Self { Self { first: None, second: None } }
}

impl<A, B> JoinBarrier<A, B> {
    pub fn supply_first(&mut self, value: A) { self.first = Some(value) }

    pub fn supply_second(&mut self, value: B) { self.second = Some(value) }

    #[inline] pub fn has_first(&self) -> bool { self.first.is_some() }

    #[inline] pub fn has_second(&self) -> bool { self.second.is_some() }

    /// Both values, or `None` while either is outstanding.
    pub fn joined(&self) -> Option<(&A, &B)> {
        self.first.as_ref().zip(self.second.as_ref())
    }

    pub fn clear_first(&mut self) { self.first = None }

    pub fn clear(&mut self) {
        self.first = None;
        self.second = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_in_either_order() {
        let mut barrier = JoinBarrier::<u8, &str>::default();
        barrier.supply_second("stats");
        assert!(barrier.joined().is_none());
        barrier.supply_first(7);
        assert_eq!(barrier.joined(), Some((&7, &"stats")));

        let mut barrier = JoinBarrier::<u8, &str>::default();
        barrier.supply_first(7);
        assert!(barrier.joined().is_none());
        barrier.supply_second("stats");
        assert!(barrier.joined().is_some());
    }

    #[test]
    fn resupply_replaces_and_clear_resets() {
        let mut barrier = JoinBarrier::<u8, u8>::default();
        barrier.supply_first(1);
        barrier.supply_second(2);
        barrier.supply_first(3);
        assert_eq!(barrier.joined(), Some((&3, &2)));

        barrier.clear_first();
        assert!(barrier.joined().is_none());
        assert!(barrier.has_second());

        barrier.clear();
        assert!(!barrier.has_first() && !barrier.has_second());
    }
}
