// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error::Error;
use std::fmt;

/// An error indicating that serialized data does not describe a rational
/// number.
///
/// Raised only while decoding. Causes for this failure include:
/// - An empty sequence
/// - A second element that is neither an integer nor a list of integers
/// - A fractional part that does not have exactly two elements
/// - More than two elements in the outer sequence
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct InvalidRepresentationError;

impl fmt::Display for InvalidRepresentationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("invalid rational representation")
    }
}

impl Error for InvalidRepresentationError {}
