use super::*;

#[test]
fn test_percentages_from_spend() {
    let spend = SpendAmounts {
        assets: vec!["gold".to_string(), "usdc".to_string(), "weth".to_string()],
        amounts: vec![10_000_000, 30_000_000, 60_000_000],
    };
    let pct = percentages_from_spend(&spend, 100_000_000).unwrap();
    assert_eq!(
        pct,
        vec![
            ("gold".to_string(), 10),
            ("usdc".to_string(), 30),
            ("weth".to_string(), 60),
        ]
    );
}

#[test]
fn test_percentage_rounds_to_cents_then_truncates() {
    // 29.999% rounds to 30.00 before truncation
    assert_eq!(spend_percentage(29_999, 100_000), 30);
    // 29.994% rounds to 29.99 and truncates to 29
    assert_eq!(spend_percentage(29_994, 100_000), 29);
    assert_eq!(spend_percentage(0, 100_000), 0);
}

#[test]
fn test_spend_errors() {
    let spend = SpendAmounts {
        assets: vec!["gold".to_string()],
        amounts: vec![1, 2],
    };
    assert_eq!(
        percentages_from_spend(&spend, 10),
        Err(AllocationError::SpendLengthMismatch {
            assets: 1,
            amounts: 2,
        })
    );
    let spend = SpendAmounts {
        assets: vec!["gold".to_string()],
        amounts: vec![1],
    };
    assert_eq!(
        percentages_from_spend(&spend, 0),
        Err(AllocationError::ZeroInputAmount)
    );
}

#[test]
fn test_scaling() {
    assert_eq!(scaled_risk_rate(62.5, 1_000_000), 62_500_000);
    assert_eq!(scaled_risk_rate(140.0, 1_000_000), 100_000_000);
    assert_eq!(scaled_amount(100, 1_000_000), 100_000_000);
}
