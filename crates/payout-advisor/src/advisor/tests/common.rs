use crate::advisor::{Advisor, AnswerSet, ReferenceTables};

pub(super) fn advisor() -> Advisor {
    Advisor::new(ReferenceTables::standard())
}

/// Answers in question order: own funds, international, stay out of flow,
/// fast integration, merchant of record.
pub(super) fn answers(flags: [bool; 5]) -> AnswerSet {
    let [q1, q2, q3, q4, q5] = flags;
    AnswerSet::from_flags(q1, q2, q3, q4, q5)
}

/// Every combination of the five answers, each allowed to be unset.
pub(super) fn tri_state_space() -> Vec<AnswerSet> {
    const STATES: [Option<bool>; 3] = [None, Some(false), Some(true)];
    let mut all = Vec::with_capacity(243);
    for q1 in STATES {
        for q2 in STATES {
            for q3 in STATES {
                for q4 in STATES {
                    for q5 in STATES {
                        all.push(AnswerSet {
                            own_funds: q1,
                            international_payouts: q2,
                            stay_out_of_funds_flow: q3,
                            fast_integration: q4,
                            merchant_of_record: q5,
                            source_location: None,
                            destinations: None,
                        });
                    }
                }
            }
        }
    }
    all
}

pub(super) fn boolean_space() -> Vec<AnswerSet> {
    (0u8..32)
        .map(|bits| {
            answers([
                bits & 0b10000 != 0,
                bits & 0b01000 != 0,
                bits & 0b00100 != 0,
                bits & 0b00010 != 0,
                bits & 0b00001 != 0,
            ])
        })
        .collect()
}
