// Copyright (C) 2026 PrintFlow contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidOrderStatus(String::from("Shipped"));
    assert_eq!(format!("{err}"), "Unknown order status: Shipped");

    let err: DomainError = DomainError::InvalidOrderCode(String::from("Order code cannot be empty"));
    assert_eq!(format!("{err}"), "Invalid order code: Order code cannot be empty");

    let err: DomainError = DomainError::InvalidSheetCount {
        raw: String::from("abc"),
        reason: "sheet count must be an integer",
    };
    assert_eq!(
        format!("{err}"),
        "Invalid sheet count 'abc': sheet count must be an integer"
    );
}
