//! Deterministic request signing for the platform API.
//!
//! The platform recomputes the digest server-side and compares it
//! byte-for-byte, so the canonical string is fixed: `key=value` pairs joined
//! with `&` in codepoint key order, then `&` and the secret key, hashed with
//! MD5 and rendered as lowercase hex. No URL-encoding and no whitespace
//! trimming are applied anywhere in the pipeline.

// crates.io
use md5::{Digest, Md5};

/// Canonicalizes `params` and produces the keyed digest the platform expects.
///
/// Pairs may arrive in any order; only the sorted order is hashed, so two
/// calls with permuted inputs always agree.
pub fn sign<'a, I>(params: I, secret_key: &str) -> String
where
	I: IntoIterator<Item = (&'a str, &'a str)>,
{
	let mut pairs = params.into_iter().collect::<Vec<_>>();

	pairs.sort_by(|(a, _), (b, _)| a.cmp(b));

	let canonical =
		pairs.into_iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join("&");

	format!("{:x}", Md5::digest(format!("{canonical}&{secret_key}").as_bytes()))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn fixed_vector_matches_the_canonical_string_digest() {
		// md5("a=1&b=2&s")
		assert_eq!(sign([("a", "1"), ("b", "2")], "s"), "fa08097e447a7d1da596412fcbc2d342");
	}

	#[test]
	fn insertion_order_does_not_change_the_digest() {
		assert_eq!(sign([("b", "2"), ("a", "1")], "s"), sign([("a", "1"), ("b", "2")], "s"));
	}

	#[test]
	fn login_shaped_params_produce_a_stable_digest() {
		let digest = sign(
			[
				("time", "1700000000000"),
				("captcha", "482913"),
				("email", "bot@example.com"),
				("clientparams", "cp-1"),
			],
			"sk-test",
		);

		// md5("captcha=482913&clientparams=cp-1&email=bot@example.com&time=1700000000000&sk-test")
		assert_eq!(digest, "b8a65acb1389f2c1907d4de12c250ea8");
	}
}
