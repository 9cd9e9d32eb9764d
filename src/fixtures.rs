//! Shared test data

use crate::trie::TrieIndex;

/// Reference dictionary: the scenario answers plus words each scenario must reject
pub const REFERENCE: &str = "\
broad 91000
cooba 4200
broma 3100
caoba 2600
stern 58000
utero 7400
steri 3100
uteri 2900
sterk 1200
stero 800
about 250000
board 88000
abort 15000
cobra 12000
kobra 300
crony 2100
broth 9800
brood 6100
groan 5400
abode 7700
aboon 150
sabot 900
stere 1100
stert 400
steer 16000
otter 14000
tears 42000
stare 36000
query 47000
merit 21000
outer 33000
ester 2500
great 310000
there 990000
crane 19000
slate 24000
eerie 5200
robot 27000
floor 61000
zorba
abaca
tetra
";

pub const REFERENCE_TOTAL: usize = 42;

pub fn reference_index() -> TrieIndex {
    TrieIndex::from_text(REFERENCE).expect("reference dictionary parses")
}

pub fn reference_words() -> Vec<&'static str> {
    REFERENCE
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect()
}
