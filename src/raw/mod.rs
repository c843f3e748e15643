mod raw_pairs;

pub(crate) use raw_pairs::RawPairs;
