// Copyright 2015-2020 Aerospike, Inc.
//
// Portions may be licensed to Aerospike, Inc. under one or more contributor
// license agreements.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License. You may obtain a copy of
// the License at http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations under
// the License.

use crate::common;

use aerospike::{as_bin, as_key, Bins, ScanPolicy, WritePolicy};

const EXPECTED: i64 = 100;

#[aerospike_macro::test]
async fn scan_all_records() {
    let _ = env_logger::try_init();

    let client = common::client().await;
    let namespace = common::namespace();
    let set_name = &common::rand_str(10);

    let wpolicy = WritePolicy::default();
    for i in 0..EXPECTED {
        let key = as_key!(namespace, set_name, i);
        let wbin = as_bin!("bin", i);
        let bins = vec![&wbin];
        client.put(&wpolicy, &key, &bins).await.unwrap();
    }

    let spolicy = ScanPolicy::default();
    let records = client
        .scan(&spolicy, namespace, set_name, Bins::All)
        .await
        .unwrap();

    let mut count = 0;
    for res in &*records {
        res.unwrap();
        count += 1;
    }
    assert_eq!(count, EXPECTED);
}

#[aerospike_macro::test]
async fn scan_cancel() {
    let _ = env_logger::try_init();

    let client = common::client().await;
    let namespace = common::namespace();
    let set_name = &common::rand_str(10);

    let wpolicy = WritePolicy::default();
    for i in 0..EXPECTED {
        let key = as_key!(namespace, set_name, i);
        let wbin = as_bin!("bin", i);
        let bins = vec![&wbin];
        client.put(&wpolicy, &key, &bins).await.unwrap();
    }

    let spolicy = ScanPolicy::default();
    let records = client
        .scan(&spolicy, namespace, set_name, Bins::All)
        .await
        .unwrap();

    let mut count = 0;
    for res in &*records {
        res.unwrap();
        count += 1;
        if count == 1 {
            records.close();
            break;
        }
    }
    assert!(count >= 1);
}
