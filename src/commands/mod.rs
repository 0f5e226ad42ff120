// Copyright (c) 2025 Ledgerview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod exporter;
pub mod goals;
pub mod recurring;
pub mod transactions;
