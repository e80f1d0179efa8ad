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

use aerospike::operations;
use aerospike::{as_bin, as_blob, as_key, as_list, as_map, as_val, Bins, ReadPolicy, WritePolicy};

#[aerospike_macro::test]
async fn put_get_delete() {
    let _ = env_logger::try_init();

    let client = common::client().await;
    let namespace = common::namespace();
    let set_name = &common::rand_str(10);

    let rpolicy = ReadPolicy::default();
    let wpolicy = WritePolicy::default();
    let key = as_key!(namespace, set_name, -1);

    let wbin1 = as_bin!("bin_str", "test string");
    let wbin2 = as_bin!("bin_list", as_list!(1u32, 2u32, 3u32));
    let wbin3 = as_bin!("bin_blob", as_blob!(vec![1u8, 2u8, 3u8]));
    let wbin4 = as_bin!("bin_map", as_map!(1 => 1, 2 => 2, 3 => "hi!"));
    let wbin5 = as_bin!("bin_float", 1.64f64);
    let bins = vec![&wbin1, &wbin2, &wbin3, &wbin4, &wbin5];

    client.delete(&wpolicy, &key).await.unwrap();

    client.put(&wpolicy, &key, &bins).await.unwrap();
    let rec = client.get(&rpolicy, &key, Bins::All).await.unwrap();
    assert_eq!(*rec.bins.get("bin_str").unwrap(), as_val!("test string"));
    assert_eq!(*rec.bins.get("bin_float").unwrap(), as_val!(1.64f64));

    client.touch(&wpolicy, &key).await.unwrap();

    let exists = client.exists(&wpolicy, &key).await.unwrap();
    assert!(exists);

    let existed = client.delete(&wpolicy, &key).await.unwrap();
    assert!(existed);

    let existed = client.delete(&wpolicy, &key).await.unwrap();
    assert!(!existed);
}

#[aerospike_macro::test]
async fn operate_coalesces_multiple_ops_into_one_result() {
    let _ = env_logger::try_init();

    let client = common::client().await;
    let namespace = common::namespace();
    let set_name = &common::rand_str(10);

    let wpolicy = WritePolicy::default();
    let key = as_key!(namespace, set_name, -1);
    let wbin = as_bin!("bin", 5);
    let bins = vec![&wbin];

    client.delete(&wpolicy, &key).await.unwrap();
    client.put(&wpolicy, &key, &bins).await.unwrap();

    let add_bin = as_bin!("bin", 7);
    let ops = &[operations::add(&add_bin), operations::get_bin("bin")];
    let rec = client.operate(&wpolicy, &key, ops).await.unwrap();
    // both ops touch "bin", so the client coalesces their results into a list
    assert_eq!(*rec.bins.get("bin").unwrap(), as_list!(12, 12));
}
