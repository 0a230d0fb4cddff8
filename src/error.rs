/*-
 * #%L
 * TPCC Bench Framework
 * %%
 * Copyright (C) 2023 OceanBase
 * %%
 * TPCC Bench Framework is licensed under Mulan PSL v2.
 * You can use this software according to the terms and conditions of the
 * Mulan PSL v2. You may obtain a copy of Mulan PSL v2 at:
 *          http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY
 * KIND, EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO
 * NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
 * See the Mulan PSL v2 for more details.
 * #L%
 */

use std::io;

quick_error! {
    #[derive(Debug)]
    pub enum Error {
        IO(e: io::Error) {
            from()
            description("IO error")
            display("IO error, err:{}", e)
            cause(e)
        }
        Common(code: CommonErrCode, descr: String) {
            description(descr)
            display("Common error, code:{:?}, err:{}", code, descr)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CommonErrCode {
    InvalidParam,
    NotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
