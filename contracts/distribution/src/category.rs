use soroban_sdk::contracttype;
use vesting_core::{tokens, SECONDS_PER_MONTH};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum AllocationCategory {
    Team,
    SeedInvestors,
    Founders,
    Advisors,
    Consultants,
    Other,
}

/// How an allocation from a category reaches the beneficiary.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReleaseTerms {
    /// Linear over `duration` seconds from allocation, nothing claimable during `lock`.
    Linear { duration: u64, lock: u64 },
    /// Transferred in full when the allocation is made.
    AtDistribution,
}

impl ReleaseTerms {
    pub fn is_revocable(self) -> bool {
        matches!(self, ReleaseTerms::Linear { .. })
    }
}

/// Where the reclaimed remainder of a revoked allocation is credited.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum RevokeCredit {
    /// Back to the category the allocation was drawn from.
    Origin,
    Pool(AllocationCategory),
}

impl RevokeCredit {
    pub fn target(self, origin: AllocationCategory) -> AllocationCategory {
        match self {
            RevokeCredit::Origin => origin,
            RevokeCredit::Pool(category) => category,
        }
    }
}

impl Default for RevokeCredit {
    fn default() -> Self {
        RevokeCredit::Pool(AllocationCategory::Other)
    }
}

impl AllocationCategory {
    pub const ALL: [AllocationCategory; 6] = [
        AllocationCategory::Team,
        AllocationCategory::SeedInvestors,
        AllocationCategory::Founders,
        AllocationCategory::Advisors,
        AllocationCategory::Consultants,
        AllocationCategory::Other,
    ];

    /// Supply fixed at deployment. The six caps sum to the crowdsale team supply.
    pub fn initial_cap(self) -> i128 {
        match self {
            AllocationCategory::Team => tokens(65_424_000),
            AllocationCategory::SeedInvestors => tokens(36_000_000),
            AllocationCategory::Founders => tokens(15_000_000),
            AllocationCategory::Advisors => tokens(122_100),
            AllocationCategory::Consultants => tokens(1_891_300),
            AllocationCategory::Other => tokens(16_562_600),
        }
    }

    pub fn release_terms(self) -> ReleaseTerms {
        match self {
            AllocationCategory::Team | AllocationCategory::Founders => ReleaseTerms::Linear {
                duration: 24 * SECONDS_PER_MONTH,
                lock: SECONDS_PER_MONTH,
            },
            AllocationCategory::SeedInvestors => ReleaseTerms::Linear {
                duration: 5 * SECONDS_PER_MONTH,
                lock: SECONDS_PER_MONTH,
            },
            AllocationCategory::Advisors
            | AllocationCategory::Consultants
            | AllocationCategory::Other => ReleaseTerms::AtDistribution,
        }
    }
}
