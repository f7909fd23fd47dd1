#![cfg(test)]

use super::math::{mul_div_floor, percent_of};
use super::{
    tokens, AttachedBonus, BonusMilestones, BonusSchedule, Entitlement, Release, VestingError,
    VestingSchedule, SECONDS_PER_MONTH,
};
use soroban_sdk::{testutils::Address as _, Address, Env};

const START: u64 = 1_000_000;

fn schedule(
    env: &Env,
    amount: i128,
    months: u64,
    lock_months: u64,
    revocable: bool,
) -> VestingSchedule {
    VestingSchedule::new(
        Address::generate(env),
        amount,
        START,
        START + months * SECONDS_PER_MONTH,
        lock_months * SECONDS_PER_MONTH,
        revocable,
    )
    .unwrap()
}

fn at_month(month: u64) -> u64 {
    START + month * SECONDS_PER_MONTH
}

#[test]
fn test_new_schedule_rejects_bad_windows() {
    let env = Env::default();
    let beneficiary = Address::generate(&env);

    assert_eq!(
        VestingSchedule::new(beneficiary.clone(), 1_000, START, START, 0, false),
        Err(VestingError::InvalidRange)
    );
    assert_eq!(
        VestingSchedule::new(beneficiary.clone(), 1_000, START, START - 1, 0, false),
        Err(VestingError::InvalidRange)
    );
    assert_eq!(
        VestingSchedule::new(beneficiary.clone(), 1_000, START, START + 100, 101, false),
        Err(VestingError::InvalidRange)
    );
    assert_eq!(
        VestingSchedule::new(beneficiary.clone(), 0, START, START + 100, 0, false),
        Err(VestingError::InvalidAmount)
    );

    let created = VestingSchedule::new(beneficiary, 1_000, START, START + 100, 100, true).unwrap();
    assert_eq!(created.amount_claimed, 0);
    assert_eq!(created.balance, 1_000);
    assert!(!created.revoked);
}

#[test]
fn test_monthly_release_over_five_months() {
    let env = Env::default();
    let mut vesting = schedule(&env, 1_000, 5, 0, false);

    for month in 1..=5 {
        let released = vesting.release(at_month(month)).unwrap();
        assert_eq!(released, 200);
        assert!(vesting.is_consistent());
    }

    assert_eq!(vesting.amount_claimed, 1_000);
    assert_eq!(vesting.balance, 0);
    assert!(vesting.is_fully_released());
    assert_eq!(vesting.release(at_month(7)).unwrap(), 0);
}

#[test]
fn test_release_truncates_and_final_release_pays_remainder() {
    let env = Env::default();
    let mut vesting = schedule(&env, 1_000, 3, 0, false);

    assert_eq!(vesting.release(at_month(1)).unwrap(), 333);
    assert_eq!(vesting.release(at_month(2)).unwrap(), 333);
    assert_eq!(vesting.release(at_month(3)).unwrap(), 334);
    assert_eq!(vesting.amount_claimed, 1_000);
    assert_eq!(vesting.balance, 0);
}

#[test]
fn test_lock_period_blocks_claims_even_when_vested() {
    let env = Env::default();
    let mut vesting = schedule(&env, tokens(240), 24, 1, true);

    let half_month = START + SECONDS_PER_MONTH / 2;
    assert_eq!(vesting.vested_amount(half_month).unwrap(), tokens(5));
    assert_eq!(vesting.releasable_amount(half_month).unwrap(), 0);
    assert_eq!(vesting.release(half_month).unwrap(), 0);

    assert_eq!(vesting.release(at_month(3)).unwrap(), tokens(30));
    assert_eq!(vesting.balance, tokens(210));
}

#[test]
fn test_release_twice_without_time_passing_is_noop() {
    let env = Env::default();
    let mut vesting = schedule(&env, 5_000, 5, 0, false);

    let now = at_month(2);
    assert_eq!(vesting.release(now).unwrap(), 2_000);
    let before = vesting.clone();
    assert_eq!(vesting.release(now).unwrap(), 0);
    assert_eq!(vesting, before);
}

#[test]
fn test_revoke_settles_vested_amount_then_zeroes_balance() {
    let env = Env::default();
    let mut vesting = schedule(&env, tokens(500), 5, 0, true);

    assert_eq!(vesting.release(at_month(3)).unwrap(), tokens(300));

    let settlement = vesting.revoke(at_month(4)).unwrap();
    assert_eq!(settlement.settled, tokens(100));
    assert_eq!(settlement.reclaimed, tokens(100));
    assert_eq!(vesting.amount_claimed, tokens(400));
    assert_eq!(vesting.balance, 0);
    assert_eq!(vesting.initial_amount, tokens(400));
    assert_eq!(vesting.amount_revoked, tokens(100));
    assert!(vesting.revoked);
    assert!(vesting.is_consistent());

    assert_eq!(vesting.release(at_month(5)), Err(VestingError::Revoked));
    assert_eq!(vesting.releasable_amount(at_month(5)).unwrap(), 0);
    assert_eq!(vesting.revoke(at_month(5)), Err(VestingError::AlreadyRevoked));
}

#[test]
fn test_revoke_requires_revocable_schedule() {
    let env = Env::default();
    let mut vesting = schedule(&env, 1_000, 5, 0, false);
    assert_eq!(vesting.revoke(at_month(1)), Err(VestingError::NotRevocable));
    assert!(!vesting.revoked);
    assert_eq!(vesting.balance, 1_000);
}

#[test]
fn test_correct_amount_respects_claimed_amount() {
    let env = Env::default();
    let mut vesting = schedule(&env, 1_000, 5, 0, true);
    vesting.release(at_month(2)).unwrap();

    assert_eq!(vesting.correct_amount(399), Err(VestingError::InvalidAmount));
    assert_eq!(vesting.correct_amount(1_500).unwrap(), 500);
    assert_eq!(vesting.balance, 1_100);
    assert_eq!(vesting.correct_amount(400).unwrap(), -1_100);
    assert_eq!(vesting.balance, 0);
    assert!(vesting.is_consistent());
}

#[test]
fn test_bonus_releases_in_two_steps() {
    let milestones = BonusMilestones::standard();
    let mut bonus = BonusSchedule::new(301, START, &milestones).unwrap();

    assert_eq!(bonus.release(at_month(5)).unwrap(), 0);
    assert_eq!(bonus.release(at_month(6)).unwrap(), 150);
    assert_eq!(bonus.release(at_month(9)).unwrap(), 0);
    assert_eq!(bonus.release(at_month(12)).unwrap(), 151);
    assert_eq!(bonus.bonus_claimed, 301);
    assert_eq!(bonus.bonus_balance, 0);
    assert!(bonus.is_consistent());
}

#[test]
fn test_bonus_milestones_validation() {
    let backwards = BonusMilestones {
        first_unlock: 10,
        final_unlock: 10,
        first_percent: 50,
    };
    assert_eq!(backwards.validate(), Err(VestingError::InvalidMilestones));

    let everything_first = BonusMilestones {
        first_unlock: 10,
        final_unlock: 20,
        first_percent: 100,
    };
    assert_eq!(
        BonusSchedule::new(10, START, &everything_first),
        Err(VestingError::InvalidMilestones)
    );
}

#[test]
fn test_entitlement_reports_principal_and_bonus_jointly() {
    let env = Env::default();
    let principal = schedule(&env, 1_000, 5, 0, false);
    let bonus = BonusSchedule::new(300, START, &BonusMilestones::standard()).unwrap();
    let mut entitlement = Entitlement::new(principal, Some(bonus));

    assert_eq!(entitlement.total_granted().unwrap(), 1_300);
    assert_eq!(
        entitlement.release(at_month(1)).unwrap(),
        Release {
            principal: 200,
            bonus: 0
        }
    );
    assert_eq!(
        entitlement.releasable_amount(at_month(6)).unwrap(),
        Release {
            principal: 800,
            bonus: 150
        }
    );
    let release = entitlement.release(at_month(12)).unwrap();
    assert_eq!(
        release,
        Release {
            principal: 800,
            bonus: 300
        }
    );
    assert_eq!(release.total().unwrap(), 1_100);
    assert!(entitlement.is_consistent());
}

#[test]
fn test_entitlement_revoke_takes_back_principal_and_bonus() {
    let env = Env::default();
    let principal = schedule(&env, 1_000, 10, 0, true);
    let bonus = BonusSchedule::new(200, START, &BonusMilestones::standard()).unwrap();
    let mut entitlement = Entitlement::new(principal, Some(bonus));

    let revocation = entitlement.revoke(at_month(6)).unwrap();
    assert_eq!(
        revocation.settled,
        Release {
            principal: 600,
            bonus: 100
        }
    );
    assert_eq!(revocation.reclaimed, 400 + 100);
    assert!(entitlement.is_revoked());
    assert_eq!(entitlement.total_granted().unwrap(), 700);
    assert_eq!(entitlement.release(at_month(12)), Err(VestingError::Revoked));
}

#[test]
fn test_fixed_point_helpers() {
    assert_eq!(mul_div_floor(7, 2, 3).unwrap(), 4);
    assert_eq!(mul_div_floor(1, 1, 0), Err(VestingError::MathOverflow));
    assert_eq!(mul_div_floor(i128::MAX, 2, 1), Err(VestingError::MathOverflow));
    assert_eq!(percent_of(tokens(1_000), 30).unwrap(), tokens(300));
    assert_eq!(percent_of(1_999, 5).unwrap(), 99);
}

#[test]
fn test_entitlement_without_bonus_releases_principal_only() {
    let env = Env::default();
    let mut entitlement = Entitlement::new(schedule(&env, 500, 5, 0, true), None);
    assert!(entitlement.bonus.is_none());
    assert_eq!(entitlement.bonus_amount(), 0);

    let release = entitlement.release(at_month(5)).unwrap();
    assert_eq!(release.principal, 500);
    assert_eq!(release.bonus, 0);

    let bonus = BonusSchedule::new(40, START, &BonusMilestones::standard()).unwrap();
    let attached = AttachedBonus::from(Some(bonus.clone()));
    assert_eq!(attached, AttachedBonus::Scheduled(bonus));
    assert_eq!(attached.as_ref().map(|b| b.bonus_amount), Some(40));
}
