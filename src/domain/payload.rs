//! Request payloads sent to the bets service.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::Serialize;

use super::bet::Bet;
use super::id::BetVersion;

/// Range for every numeric field of a create request.
pub const CREATE_AMOUNT_RANGE: RangeInclusive<i64> = 1..=50;

/// Range for every numeric field of an update request.
pub const UPDATE_AMOUNT_RANGE: RangeInclusive<i64> = 5000..=6000;

/// Body of `POST /bets`. Never carries an id or version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBetRequest {
    pub customer_id: i64,
    pub pre_tax_amount: i64,
    pub post_tax_amount: i64,
}

impl CreateBetRequest {
    /// Draw every field uniformly from [`CREATE_AMOUNT_RANGE`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            customer_id: rng.gen_range(CREATE_AMOUNT_RANGE),
            pre_tax_amount: rng.gen_range(CREATE_AMOUNT_RANGE),
            post_tax_amount: rng.gen_range(CREATE_AMOUNT_RANGE),
        }
    }
}

/// Body of `POST /bets/{betId}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBetRequest {
    pub customer_id: i64,
    pub pre_tax_amount: i64,
    pub post_tax_amount: i64,
    pub version: BetVersion,
}

impl UpdateBetRequest {
    /// Fresh amounts from [`UPDATE_AMOUNT_RANGE`], version copied from `bet`.
    ///
    /// The version is whatever the snapshot holds, even if the service has
    /// since moved on; conflicts are for the service to detect.
    pub fn random_for<R: Rng + ?Sized>(bet: &Bet, rng: &mut R) -> Self {
        Self {
            customer_id: rng.gen_range(UPDATE_AMOUNT_RANGE),
            pre_tax_amount: rng.gen_range(UPDATE_AMOUNT_RANGE),
            post_tax_amount: rng.gen_range(UPDATE_AMOUNT_RANGE),
            version: bet.version.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    #[test]
    fn create_fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let request = CreateBetRequest::random(&mut rng);
            assert!(CREATE_AMOUNT_RANGE.contains(&request.customer_id));
            assert!(CREATE_AMOUNT_RANGE.contains(&request.pre_tax_amount));
            assert!(CREATE_AMOUNT_RANGE.contains(&request.post_tax_amount));
        }
    }

    #[test]
    fn create_body_has_no_id_or_version() {
        let body = serde_json::to_value(CreateBetRequest {
            customer_id: 1,
            pre_tax_amount: 2,
            post_tax_amount: 3,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({"customerId": 1, "preTaxAmount": 2, "postTaxAmount": 3})
        );
    }

    #[test]
    fn update_echoes_snapshot_version() {
        let bet = Bet::new("x1", BetVersion::from("v1"));
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let request = UpdateBetRequest::random_for(&bet, &mut rng);
            assert_eq!(request.version, BetVersion::from("v1"));
            assert!(UPDATE_AMOUNT_RANGE.contains(&request.customer_id));
            assert!(UPDATE_AMOUNT_RANGE.contains(&request.pre_tax_amount));
            assert!(UPDATE_AMOUNT_RANGE.contains(&request.post_tax_amount));
        }
    }

    #[test]
    fn update_without_version_sends_null() {
        let bet = Bet::new("x1", BetVersion::default());
        let mut rng = StdRng::seed_from_u64(1);
        let body = serde_json::to_value(UpdateBetRequest::random_for(&bet, &mut rng)).unwrap();
        assert_eq!(body["version"], serde_json::Value::Null);
    }

    #[test]
    fn same_seed_same_payloads() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(
            CreateBetRequest::random(&mut a),
            CreateBetRequest::random(&mut b)
        );
    }
}
