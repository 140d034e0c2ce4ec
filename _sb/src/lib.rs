pub mod bitset {
    pub struct BitSetImpl<I> {
        bits: Vec<bool>,
        _p: std::marker::PhantomData<I>,
    }
    impl<I: Copy + TryInto<usize> + TryFrom<usize>> BitSetImpl<I>
    where
        <I as TryInto<usize>>::Error: std::fmt::Debug,
        <I as TryFrom<usize>>::Error: std::fmt::Debug,
    {
        pub fn new(n: I) -> Self {
            Self { bits: vec![false; n.try_into().unwrap()], _p: std::marker::PhantomData }
        }
        pub fn new_with_bits_set(n: I, iter: impl IntoIterator<Item = I>) -> Self {
            let mut s = Self::new(n);
            for i in iter { s.set_bit(i); }
            s
        }
        pub fn set_bit(&mut self, i: I) -> bool {
            let i: usize = i.try_into().unwrap();
            std::mem::replace(&mut self.bits[i], true)
        }
        pub fn get_bit(&self, i: I) -> bool {
            self.bits[i.try_into().unwrap()]
        }
        pub fn cardinality(&self) -> u64 {
            self.bits.iter().filter(|&&b| b).count() as u64
        }
    }
}
