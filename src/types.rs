use smallvec::SmallVec;

pub type Order = u64;

pub type Segments<'a> = SmallVec<[&'a str; 8]>;
pub type Expansions<'a> = SmallVec<[&'a str; 4]>;
