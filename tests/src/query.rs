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

use aerospike::task::Status;
use aerospike::{as_bin, as_eq, as_key, as_range, as_val, Bins, IndexType, QueryPolicy, Statement, WritePolicy};

const EXPECTED: i64 = 100;

#[aerospike_macro::test]
async fn query_with_filter() {
    let _ = env_logger::try_init();

    let client = common::client().await;
    let namespace = common::namespace();
    let set_name = &common::rand_str(10);
    let bin_name = common::rand_str(10);
    let index_name = common::rand_str(10);

    let wpolicy = WritePolicy::default();
    for i in 0..EXPECTED {
        let key = as_key!(namespace, set_name, i);
        let wbin = as_bin!(&bin_name, i);
        let bins = vec![&wbin];
        client.put(&wpolicy, &key, &bins).await.unwrap();
    }

    let index_task = client
        .create_index(namespace, set_name, &bin_name, &index_name, IndexType::Numeric)
        .await
        .unwrap();
    assert!(matches!(
        index_task.wait_till_complete(None).await,
        Ok(Status::Complete)
    ));

    let qpolicy = QueryPolicy::default();

    let mut statement = Statement::new(namespace, set_name, Bins::All);
    statement.add_filter(as_eq!(bin_name.as_str(), 1));
    let records = client.query(&qpolicy, statement).await.unwrap();
    let mut count = 0;
    for res in &*records {
        let rec = res.unwrap();
        assert_eq!(*rec.bins.get(&bin_name).unwrap(), as_val!(1));
        count += 1;
    }
    assert_eq!(count, 1);

    let mut statement = Statement::new(namespace, set_name, Bins::All);
    statement.add_filter(as_range!(bin_name.as_str(), 0, 9));
    let records = client.query(&qpolicy, statement).await.unwrap();
    let mut count = 0;
    for res in &*records {
        let rec = res.unwrap();
        let v = i64::from(rec.bins.get(&bin_name).unwrap());
        assert!((0..10).contains(&v));
        count += 1;
    }
    assert_eq!(count, 10);
}
