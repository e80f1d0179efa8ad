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

use aerospike::{as_bin, as_geo, as_key, Bins, ReadPolicy, WritePolicy};

#[aerospike_macro::test]
async fn geo_bin_roundtrip() {
    let _ = env_logger::try_init();

    let client = common::client().await;
    let namespace = common::namespace();
    let set_name = &common::rand_str(10);

    let wpolicy = WritePolicy::default();
    let rpolicy = ReadPolicy::default();
    let key = as_key!(namespace, set_name, -1);

    let point = format!(
        "{{ \"type\": \"Point\", \"coordinates\": [{}, {}] }}",
        17.119381, 19.45612
    );
    let wbin = as_bin!("bin", as_geo!(point.clone()));
    let bins = vec![&wbin];

    client.delete(&wpolicy, &key).await.unwrap();
    client.put(&wpolicy, &key, &bins).await.unwrap();

    let rec = client.get(&rpolicy, &key, Bins::All).await.unwrap();
    assert_eq!(*rec.bins.get("bin").unwrap(), as_geo!(point));
}
