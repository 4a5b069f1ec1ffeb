// Copyright (C) Microsoft Corporation. All rights reserved.

mod digest;

use test_log::test;

use super::*;
